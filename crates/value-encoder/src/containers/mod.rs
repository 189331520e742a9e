//! The three container writers of the encoding protocol.
//!
//! Each writer borrows mutably into the tree being built, so the borrow
//! checker enforces that a container is bound to exactly one slot and that
//! writers are used one at a time.

mod keyed;
mod seq;
mod single;

pub use keyed::KeyedContainer;
pub use seq::SeqContainer;
pub use single::SingleValueContainer;

use std::fmt::Display;

use crate::escape::{escape_special, quoted};
use crate::node::ValueNode;

/// Canonical unquoted text of a non-string scalar.
fn scalar(value: impl Display) -> ValueNode {
    ValueNode::Single(Some(value.to_string()))
}

/// Quote-wrapped, escape-processed string scalar.
fn quoted_scalar(value: &str) -> ValueNode {
    ValueNode::Single(Some(quoted(value)))
}

/// Escape-processed string scalar without surrounding quotes.
fn unquoted_scalar(value: &str) -> ValueNode {
    ValueNode::Single(Some(escape_special(value)))
}
