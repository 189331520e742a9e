//! Top-level query and mutation documents.

use std::fmt;

use graphql_value_encoder::{Encodable, EncodeError, ValueEncoder};

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::fragment::Fragment;
use crate::selection::Selection;
use crate::variable::Variable;

/// The operation keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    /// No keyword at all; the document starts with the operation name or
    /// the selection set.
    None,
}

impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::None => "",
        }
    }
}

/// The top-level document: kind, optional name, declared variables, a
/// selection set, and the fragments it spreads.
///
/// Operation-level fragments appear twice in the rendered document: as
/// spreads at the end of the selection set and as definitions appended after
/// the closing brace.
pub struct Operation {
    kind: OperationKind,
    name: Option<String>,
    variables: Vec<Variable>,
    selections: Vec<Selection>,
    fragments: Vec<Fragment>,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Operation {
            kind,
            name: None,
            variables: Vec::new(),
            selections: Vec::new(),
            fragments: Vec::new(),
        }
    }

    pub fn query() -> Self {
        Operation::new(OperationKind::Query)
    }

    pub fn mutation() -> Self {
        Operation::new(OperationKind::Mutation)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn with_variables(mut self, variables: impl IntoIterator<Item = Variable>) -> Self {
        self.variables.extend(variables);
        self
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selections.push(selection.into());
        self
    }

    pub fn with_selections(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selections.extend(selections);
        self
    }

    /// Attach a fragment definition (and its spread) to the operation.
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_fragments(mut self, fragments: impl IntoIterator<Item = Fragment>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Compact document under the default configuration.
    pub fn render(&self) -> Result<String, BuildError> {
        self.render_with(&DocumentConfig::default())
    }

    /// Compact document:
    /// `<kw>[ name][($k:T,…)]{sel …spreads}<definitions joined by spaces>`.
    pub fn render_with(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        let mut out = String::from(self.kind.keyword());

        if let Some(name) = &self.name {
            if self.kind != OperationKind::None {
                out.push(' ');
            }
            out.push_str(name);
        }

        if !self.variables.is_empty() {
            let declarations: Vec<String> =
                self.variables.iter().map(Variable::declaration).collect();
            out.push('(');
            out.push_str(&declarations.join(","));
            out.push(')');
        }

        let mut entries = Vec::with_capacity(self.selections.len() + self.fragments.len());
        for selection in &self.selections {
            entries.push(selection.render(config)?);
        }
        for fragment in &self.fragments {
            entries.push(fragment.spread().render());
        }
        out.push('{');
        out.push_str(&entries.join(" "));
        out.push('}');

        if !self.fragments.is_empty() {
            let definitions: Vec<String> = self
                .fragments
                .iter()
                .map(|fragment| fragment.render_definition(config))
                .collect::<Result<_, _>>()?;
            out.push_str(&definitions.join(" "));
        }

        Ok(out)
    }

    /// Pretty document under the default configuration.
    pub fn render_pretty(&self) -> Result<String, BuildError> {
        self.render_pretty_with(&DocumentConfig::default())
    }

    /// Indented document; content-identical to [`Operation::render_with`]
    /// after stripping whitespace.
    pub fn render_pretty_with(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        let mut out = String::from(self.kind.keyword());

        if let Some(name) = &self.name {
            if self.kind != OperationKind::None {
                out.push(' ');
            }
            out.push_str(name);
        }

        if !self.variables.is_empty() {
            let declarations: Vec<String> = self
                .variables
                .iter()
                .map(Variable::pretty_declaration)
                .collect();
            out.push_str(" (");
            out.push_str(&declarations.join(", "));
            out.push(')');
        }

        let mut entries = Vec::with_capacity(self.selections.len() + self.fragments.len());
        for selection in &self.selections {
            entries.push(selection.render_pretty(1, config)?);
        }
        for fragment in &self.fragments {
            entries.push(fragment.spread().render_pretty(1, config));
        }
        out.push_str(" {\n");
        out.push_str(&entries.join("\n"));
        out.push_str("\n}");

        if !self.fragments.is_empty() {
            let definitions: Vec<String> = self
                .fragments
                .iter()
                .map(|fragment| fragment.render_pretty_definition(0, config))
                .collect::<Result<_, _>>()?;
            out.push_str("\n\n");
            out.push_str(&definitions.join("\n\n"));
        }

        Ok(out)
    }
}

/// Request-body form of an operation:
/// `{query, operationName?, variables?}`.
///
/// Requires a [`DocumentConfig`] in the encoder pass context; encoding
/// through a bare encoder fails instead of silently assuming defaults.
/// Variables write through a continuation slot, so an operation without any
/// leaves the `variables` key out of the payload.
impl Encodable for Operation {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let config = encoder
            .user_info::<DocumentConfig>()
            .cloned()
            .ok_or_else(|| EncodeError::custom(BuildError::MissingDocumentConfig))?;
        let document = self.render_with(&config).map_err(EncodeError::custom)?;

        let mut keyed = encoder.as_keyed();
        keyed.write_str("query", &document);
        if let Some(name) = &self.name {
            keyed.write_str("operationName", name);
        }
        let mut variables_slot = keyed.continuation("variables");
        for variable in &self.variables {
            variable.encode(&mut variables_slot)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("variables", &self.variables)
            .field("selections", &self.selections)
            .field("fragments", &self.fragments)
            .finish()
    }
}
