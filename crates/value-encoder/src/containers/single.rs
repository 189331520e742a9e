//! Single-value container writer.

use crate::encoder::{encode_to_node, Encodable};
use crate::error::EncodeError;
use crate::escape::{escape_special, quoted};
use crate::node::ValueNode;

/// Writer over a single-value slot. Only one write is meaningful; a later
/// write overwrites the earlier one.
pub struct SingleValueContainer<'a> {
    slot: &'a mut Option<ValueNode>,
}

impl<'a> SingleValueContainer<'a> {
    pub(crate) fn new(slot: &'a mut Option<ValueNode>) -> Self {
        SingleValueContainer { slot }
    }

    fn bind(&mut self, value: Option<String>) {
        *self.slot = Some(ValueNode::Single(value));
    }

    pub fn write_bool(&mut self, value: bool) {
        self.bind(Some(value.to_string()));
    }

    pub fn write_int(&mut self, value: impl Into<i64>) {
        self.bind(Some(value.into().to_string()));
    }

    pub fn write_uint(&mut self, value: u64) {
        self.bind(Some(value.to_string()));
    }

    pub fn write_float(&mut self, value: f64) {
        self.bind(Some(value.to_string()));
    }

    /// Quote-wrapped, escape-processed string.
    pub fn write_str(&mut self, value: &str) {
        self.bind(Some(quoted(value)));
    }

    /// String without surrounding quotes (still escape-processed).
    pub fn write_unquoted_str(&mut self, value: &str) {
        self.bind(Some(escape_special(value)));
    }

    /// Clear the slot back to the genuinely-empty state. Renders as `null`
    /// when nils are encoded and as absent otherwise.
    pub fn write_nil(&mut self) {
        self.bind(None);
    }

    /// Encode a nested value into a fresh pass and adopt the resulting node
    /// wholesale. A value that writes nothing leaves the slot empty.
    pub fn write_value<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        match encode_to_node(value)? {
            Some(node) => *self.slot = Some(node),
            None => *self.slot = Some(ValueNode::single()),
        }
        Ok(())
    }
}
