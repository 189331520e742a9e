//! Named fragments and their spreads.

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::selection::{render_set, render_set_pretty, Selection};

/// A named, reusable selection set conditioned on a type.
///
/// A fragment is referenced from selection sets via [`Fragment::spread`] and
/// defined once at the operation level.
#[derive(Debug)]
pub struct Fragment {
    name: String,
    type_condition: String,
    selections: Vec<Selection>,
}

impl Fragment {
    pub fn new(name: impl Into<String>, on_type: impl Into<String>) -> Self {
        Fragment {
            name: name.into(),
            type_condition: on_type.into(),
            selections: Vec::new(),
        }
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

    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    /// The spread reference used inside selection sets.
    pub fn spread(&self) -> FragmentSpread {
        FragmentSpread::new(self.name.clone())
    }

    /// Definition form: `fragment <name> on <type> {…}`.
    pub fn render_definition(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        Ok(format!(
            "fragment {} on {} {{{}}}",
            self.name,
            self.type_condition,
            render_set(&self.selections, config)?
        ))
    }

    /// Indented definition; selections sit one level below `level`.
    pub fn render_pretty_definition(
        &self,
        level: usize,
        config: &DocumentConfig,
    ) -> Result<String, BuildError> {
        Ok(format!(
            "fragment {} on {} {{\n{}\n}}",
            self.name,
            self.type_condition,
            render_set_pretty(&self.selections, level + 1, config)?
        ))
    }
}

/// A reference to a named fragment: `...name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSpread {
    name: String,
}

impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        FragmentSpread { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> String {
        format!("...{}", self.name)
    }

    pub fn render_pretty(&self, level: usize, config: &DocumentConfig) -> String {
        format!("{}{}", " ".repeat(level * config.indent), self.render())
    }
}

impl From<&Fragment> for FragmentSpread {
    fn from(fragment: &Fragment) -> Self {
        fragment.spread()
    }
}
