//! Fields: the named nodes of a selection.

use std::fmt;

use graphql_value_encoder::{Encodable, TextEncoder};
use indexmap::IndexMap;

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::selection::Selection;
use crate::variable::Variable;

/// A single requested data node: name, optional alias, variable references,
/// arguments, and child selections.
///
/// Arguments hold arbitrary [`Encodable`] values and are encoded lazily when
/// the field renders, with unquoted keys and dropped nils. An argument whose
/// value encodes to no output is left out of the parameter list; an argument
/// whose value fails to encode aborts the render with the offending key
/// attached.
pub struct Field {
    name: String,
    alias: Option<String>,
    variables: IndexMap<String, String>,
    arguments: IndexMap<String, Box<dyn Encodable>>,
    selections: Vec<Selection>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            alias: None,
            variables: IndexMap::new(),
            arguments: IndexMap::new(),
            selections: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Reference an operation variable from the argument `name`, rendered as
    /// `name:$key`.
    pub fn with_variable(mut self, name: impl Into<String>, variable: &Variable) -> Self {
        self.variables.insert(name.into(), variable.key().to_owned());
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Encodable + 'static) -> Self {
        self.arguments.insert(name.into(), Box::new(value));
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Compact form: `[alias:]name[(k:$v,k2:arg)]{child1 child2}`.
    pub fn render(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        let mut out = String::new();
        match &self.alias {
            Some(alias) => {
                out.push_str(alias);
                out.push(':');
                out.push_str(&self.name);
            }
            None => out.push_str(&self.name),
        }

        let parameters = self.render_parameters(false)?;
        if !parameters.is_empty() {
            out.push('(');
            out.push_str(&parameters.join(","));
            out.push(')');
        }

        if !self.selections.is_empty() {
            let children: Vec<String> = self
                .selections
                .iter()
                .map(|selection| selection.render(config))
                .collect::<Result<_, _>>()?;
            out.push('{');
            out.push_str(&children.join(" "));
            out.push('}');
        }

        Ok(out)
    }

    /// Indented form; content-identical to [`Field::render`] after stripping
    /// whitespace.
    pub fn render_pretty(&self, level: usize, config: &DocumentConfig) -> Result<String, BuildError> {
        let pad = " ".repeat(level * config.indent);
        let mut out = pad.clone();
        match &self.alias {
            Some(alias) => {
                out.push_str(alias);
                out.push_str(": ");
                out.push_str(&self.name);
            }
            None => out.push_str(&self.name),
        }

        let parameters = self.render_parameters(true)?;
        if !parameters.is_empty() {
            out.push('(');
            out.push_str(&parameters.join(", "));
            out.push(')');
        }

        if !self.selections.is_empty() {
            let children: Vec<String> = self
                .selections
                .iter()
                .map(|selection| selection.render_pretty(level + 1, config))
                .collect::<Result<_, _>>()?;
            out.push_str(" {\n");
            out.push_str(&children.join("\n"));
            out.push('\n');
            out.push_str(&pad);
            out.push('}');
        }

        Ok(out)
    }

    /// Variable references first, then encoded arguments, in insertion
    /// order.
    fn render_parameters(&self, pretty: bool) -> Result<Vec<String>, BuildError> {
        let separator = if pretty { ": " } else { ":" };
        let mut parameters = Vec::with_capacity(self.variables.len() + self.arguments.len());

        for (name, key) in &self.variables {
            parameters.push(format!("{name}{separator}${key}"));
        }

        let encoder = TextEncoder::new(false, false);
        for (name, value) in &self.arguments {
            match encoder.encode(value.as_ref()) {
                Ok(Some(text)) => parameters.push(format!("{name}{separator}{text}")),
                Ok(None) => continue,
                Err(source) => {
                    return Err(BuildError::Argument {
                        key: name.clone(),
                        source,
                    })
                }
            }
        }

        Ok(parameters)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("variables", &self.variables)
            .field("arguments", &self.arguments.keys().collect::<Vec<_>>())
            .field("selections", &self.selections)
            .finish()
    }
}
