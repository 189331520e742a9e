//! The members of a selection set.

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::field::Field;
use crate::fragment::{Fragment, FragmentSpread};
use crate::inline_fragment::InlineFragment;

/// One entry of a selection set: a field, a fragment spread, or an inline
/// fragment.
#[derive(Debug)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    /// Compact single-line form.
    pub fn render(&self, config: &DocumentConfig) -> Result<String, BuildError> {
        match self {
            Selection::Field(field) => field.render(config),
            Selection::FragmentSpread(spread) => Ok(spread.render()),
            Selection::InlineFragment(inline) => inline.render(config),
        }
    }

    /// Indented multi-line form at `level`.
    pub fn render_pretty(&self, level: usize, config: &DocumentConfig) -> Result<String, BuildError> {
        match self {
            Selection::Field(field) => field.render_pretty(level, config),
            Selection::FragmentSpread(spread) => Ok(spread.render_pretty(level, config)),
            Selection::InlineFragment(inline) => inline.render_pretty(level, config),
        }
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Selection::FragmentSpread(spread)
    }
}

impl From<InlineFragment> for Selection {
    fn from(inline: InlineFragment) -> Self {
        Selection::InlineFragment(inline)
    }
}

/// A `&Fragment` converts to a spread of that fragment.
impl From<&Fragment> for Selection {
    fn from(fragment: &Fragment) -> Self {
        Selection::FragmentSpread(fragment.spread())
    }
}

/// Compact selection-set body: entries joined by single spaces.
pub(crate) fn render_set(
    selections: &[Selection],
    config: &DocumentConfig,
) -> Result<String, BuildError> {
    let parts: Vec<String> = selections
        .iter()
        .map(|selection| selection.render(config))
        .collect::<Result<_, _>>()?;
    Ok(parts.join(" "))
}

/// Pretty selection-set body: one entry per line at `level`.
pub(crate) fn render_set_pretty(
    selections: &[Selection],
    level: usize,
    config: &DocumentConfig,
) -> Result<String, BuildError> {
    let parts: Vec<String> = selections
        .iter()
        .map(|selection| selection.render_pretty(level, config))
        .collect::<Result<_, _>>()?;
    Ok(parts.join("\n"))
}
