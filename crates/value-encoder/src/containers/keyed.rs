//! Keyed container writer.

use indexmap::IndexMap;

use super::{quoted_scalar, scalar, unquoted_scalar, SeqContainer};
use crate::encoder::{encode_to_node, Encodable, ValueEncoder};
use crate::error::EncodeError;
use crate::node::ValueNode;

/// Writer over a keyed node. One container request per key: writing a key
/// twice overwrites the earlier entry.
pub struct KeyedContainer<'a> {
    entries: &'a mut IndexMap<String, ValueNode>,
}

impl<'a> KeyedContainer<'a> {
    pub(crate) fn new(entries: &'a mut IndexMap<String, ValueNode>) -> Self {
        KeyedContainer { entries }
    }

    pub fn write_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_owned(), scalar(value));
    }

    pub fn write_int(&mut self, key: &str, value: impl Into<i64>) {
        self.entries.insert(key.to_owned(), scalar(value.into()));
    }

    pub fn write_uint(&mut self, key: &str, value: u64) {
        self.entries.insert(key.to_owned(), scalar(value));
    }

    pub fn write_float(&mut self, key: &str, value: f64) {
        self.entries.insert(key.to_owned(), scalar(value));
    }

    /// Quote-wrapped, escape-processed string entry.
    pub fn write_str(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), quoted_scalar(value));
    }

    /// String entry without surrounding quotes (still escape-processed).
    pub fn write_unquoted_str(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), unquoted_scalar(value));
    }

    /// Explicit nil entry. Renders as `key: null` when nils are encoded,
    /// and disappears when they are not.
    pub fn write_nil(&mut self, key: &str) {
        self.entries.insert(key.to_owned(), ValueNode::single());
    }

    /// Encode a nested value into a fresh pass. If the value writes nothing
    /// the key is omitted entirely, which keeps "no value produced" distinct
    /// from an explicit nil.
    pub fn write_value<T: Encodable + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), EncodeError> {
        if let Some(node) = encode_to_node(value)? {
            self.entries.insert(key.to_owned(), node);
        }
        Ok(())
    }

    /// Bind a fresh keyed node at `key` and return its writer.
    pub fn nested_keyed(&mut self, key: &str) -> KeyedContainer<'_> {
        self.entries.insert(key.to_owned(), ValueNode::keyed());
        match self.entries.get_mut(key) {
            Some(ValueNode::Keyed(entries)) => KeyedContainer::new(entries),
            _ => unreachable!("key was just bound to a keyed node"),
        }
    }

    /// Bind a fresh sequence node at `key` and return its writer.
    pub fn nested_seq(&mut self, key: &str) -> SeqContainer<'_> {
        self.entries.insert(key.to_owned(), ValueNode::seq());
        match self.entries.get_mut(key) {
            Some(ValueNode::Seq(items)) => SeqContainer::new(items),
            _ => unreachable!("key was just bound to a sequence node"),
        }
    }

    /// Delegated encoding: bind a continuation slot at `key` and return an
    /// encoder over it. The slot may stay unresolved, in which case the key
    /// renders as absent.
    pub fn continuation(&mut self, key: &str) -> ValueEncoder<'_> {
        self.entries.insert(key.to_owned(), ValueNode::delegated());
        match self.entries.get_mut(key) {
            Some(ValueNode::Delegated(slot)) => ValueEncoder::detached(&mut **slot),
            _ => unreachable!("key was just bound to a delegated node"),
        }
    }
}
