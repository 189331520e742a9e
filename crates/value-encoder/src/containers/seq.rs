//! Sequence container writer.

use super::keyed::KeyedContainer;
use super::{quoted_scalar, scalar, unquoted_scalar};
use crate::encoder::{encode_to_node, Encodable, ValueEncoder};
use crate::error::EncodeError;
use crate::node::ValueNode;

/// Writer over a sequence node. Append order is element order. Sequence
/// slots are positional: nothing is ever skipped, so an element with no
/// value is kept as an explicit placeholder and renders as `null`.
pub struct SeqContainer<'a> {
    items: &'a mut Vec<ValueNode>,
}

impl<'a> SeqContainer<'a> {
    pub(crate) fn new(items: &'a mut Vec<ValueNode>) -> Self {
        SeqContainer { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_bool(&mut self, value: bool) {
        self.items.push(scalar(value));
    }

    pub fn push_int(&mut self, value: impl Into<i64>) {
        self.items.push(scalar(value.into()));
    }

    pub fn push_uint(&mut self, value: u64) {
        self.items.push(scalar(value));
    }

    pub fn push_float(&mut self, value: f64) {
        self.items.push(scalar(value));
    }

    /// Quote-wrapped, escape-processed string element.
    pub fn push_str(&mut self, value: &str) {
        self.items.push(quoted_scalar(value));
    }

    /// String element without surrounding quotes (still escape-processed).
    pub fn push_unquoted_str(&mut self, value: &str) {
        self.items.push(unquoted_scalar(value));
    }

    /// Explicit absent placeholder element.
    pub fn push_nil(&mut self) {
        self.items.push(ValueNode::single());
    }

    /// Encode a nested value into a fresh pass. A value that writes nothing
    /// still occupies its position, as an absent placeholder.
    pub fn push_value<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        match encode_to_node(value)? {
            Some(node) => self.items.push(node),
            None => self.items.push(ValueNode::single()),
        }
        Ok(())
    }

    /// Append a fresh keyed node and return its writer.
    pub fn nested_keyed(&mut self) -> KeyedContainer<'_> {
        self.items.push(ValueNode::keyed());
        match self.items.last_mut() {
            Some(ValueNode::Keyed(entries)) => KeyedContainer::new(entries),
            _ => unreachable!("a keyed node was just appended"),
        }
    }

    /// Append a fresh sequence node and return its writer.
    pub fn nested_seq(&mut self) -> SeqContainer<'_> {
        self.items.push(ValueNode::seq());
        match self.items.last_mut() {
            Some(ValueNode::Seq(items)) => SeqContainer::new(items),
            _ => unreachable!("a sequence node was just appended"),
        }
    }

    /// Delegated encoding: append a continuation slot and return an encoder
    /// over it.
    pub fn continuation(&mut self) -> ValueEncoder<'_> {
        self.items.push(ValueNode::delegated());
        match self.items.last_mut() {
            Some(ValueNode::Delegated(slot)) => ValueEncoder::detached(&mut **slot),
            _ => unreachable!("a delegated node was just appended"),
        }
    }
}
