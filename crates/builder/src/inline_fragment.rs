//! Anonymous, type-conditioned selection sets.

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::selection::{render_set, render_set_pretty, Selection};

/// An inline fragment: `... on <type>{…}`. Embedded directly where it is
/// used; never referenced by name.
#[derive(Debug)]
pub struct InlineFragment {
    type_condition: String,
    selections: Vec<Selection>,
}

impl InlineFragment {
    pub fn new(on_type: impl Into<String>) -> Self {
        InlineFragment {
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

    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    pub fn render(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        Ok(format!(
            "... on {}{{{}}}",
            self.type_condition,
            render_set(&self.selections, config)?
        ))
    }

    pub fn render_pretty(&self, level: usize, config: &DocumentConfig) -> Result<String, BuildError> {
        let pad = " ".repeat(level * config.indent);
        Ok(format!(
            "{pad}... on {} {{\n{}\n{pad}}}",
            self.type_condition,
            render_set_pretty(&self.selections, level + 1, config)?
        ))
    }
}
