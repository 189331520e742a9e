//! Root encoder: the dispatch point every encodable value writes through.

use std::any::Any;

use crate::containers::{KeyedContainer, SeqContainer, SingleValueContainer};
use crate::error::EncodeError;
use crate::node::ValueNode;
use crate::user_info::UserInfo;

/// A value that can describe itself to the encoder.
///
/// An implementation requests exactly one container from the encoder it is
/// handed (keyed, sequence, or single-value) and writes its content through
/// that container. Requesting nothing is allowed and means "no output".
pub trait Encodable {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError>;
}

/// The destination handed to [`Encodable::encode`].
///
/// Owns one node slot. The first container request decides the node's shape;
/// a repeated request of the same kind reuses the bound node, while a request
/// of a different kind overwrites the slot (last declared container wins).
pub struct ValueEncoder<'a> {
    slot: &'a mut Option<ValueNode>,
    info: Option<&'a UserInfo>,
}

impl<'a> ValueEncoder<'a> {
    pub(crate) fn new(slot: &'a mut Option<ValueNode>, info: Option<&'a UserInfo>) -> Self {
        ValueEncoder { slot, info }
    }

    /// Encoder over a continuation slot. Continuations never inherit the
    /// root pass context.
    pub(crate) fn detached(slot: &'a mut Option<ValueNode>) -> Self {
        ValueEncoder { slot, info: None }
    }

    /// Bind (or rebind) the slot to a keyed node and return its writer.
    pub fn as_keyed(&mut self) -> KeyedContainer<'_> {
        if !matches!(*self.slot, Some(ValueNode::Keyed(_))) {
            *self.slot = Some(ValueNode::keyed());
        }
        match self.slot.as_mut() {
            Some(ValueNode::Keyed(entries)) => KeyedContainer::new(entries),
            _ => unreachable!("slot was just bound to a keyed node"),
        }
    }

    /// Bind (or rebind) the slot to a sequence node and return its writer.
    pub fn as_seq(&mut self) -> SeqContainer<'_> {
        if !matches!(*self.slot, Some(ValueNode::Seq(_))) {
            *self.slot = Some(ValueNode::seq());
        }
        match self.slot.as_mut() {
            Some(ValueNode::Seq(items)) => SeqContainer::new(items),
            _ => unreachable!("slot was just bound to a sequence node"),
        }
    }

    /// Bind (or rebind) the slot to a single-value node and return its
    /// writer.
    pub fn as_single_value(&mut self) -> SingleValueContainer<'_> {
        if !matches!(*self.slot, Some(ValueNode::Single(_))) {
            *self.slot = Some(ValueNode::single());
        }
        SingleValueContainer::new(self.slot)
    }

    /// Short-circuit: bind the slot to an already-final string, inserted
    /// verbatim into the rendered output.
    pub fn write_raw(&mut self, text: impl Into<String>) {
        *self.slot = Some(ValueNode::Raw(text.into()));
    }

    /// Look up a value placed in the pass context by the caller of the root
    /// encode. `None` for nested and continuation encoders.
    pub fn user_info<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.info.and_then(UserInfo::get)
    }
}

/// Run one encode pass over `value`.
///
/// `Ok(None)` means the value's encode routine never requested a container;
/// the caller decides what omission means at its level.
pub fn encode_to_node<T: Encodable + ?Sized>(value: &T) -> Result<Option<ValueNode>, EncodeError> {
    encode_to_node_with_info(value, None)
}

/// [`encode_to_node`] with a pass context visible to the root encoder.
pub fn encode_to_node_with_info<T: Encodable + ?Sized>(
    value: &T,
    info: Option<&UserInfo>,
) -> Result<Option<ValueNode>, EncodeError> {
    let mut slot = None;
    let mut encoder = ValueEncoder::new(&mut slot, info);
    value.encode(&mut encoder)?;
    Ok(slot)
}
