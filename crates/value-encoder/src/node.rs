//! The intermediate tree an encode pass builds before rendering.

use indexmap::IndexMap;

/// One node of an in-progress encoded value.
///
/// A [`crate::ValueEncoder`] owns exactly one node slot; the container
/// writers own one slot each inside their parent node. Writing into a slot
/// twice overwrites the previous content (last write wins).
#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// Mapping from key to child node. Keys are unique; insertion order is
    /// preserved so rendering is deterministic without sorting.
    Keyed(IndexMap<String, ValueNode>),
    /// Ordered list of child nodes. Order is significant; absent elements
    /// are kept as `Single(None)` placeholders, never dropped.
    Seq(Vec<ValueNode>),
    /// A single slot holding a pre-rendered literal (quoting and escaping
    /// are decided at write time), or nothing at all.
    Single(Option<String>),
    /// An already-final string inserted verbatim.
    Raw(String),
    /// A continuation slot handed out before its value was written. The
    /// referent may stay unpopulated; an unresolved delegate renders as
    /// absent.
    Delegated(Box<Option<ValueNode>>),
}

impl ValueNode {
    /// Fresh empty keyed node.
    pub fn keyed() -> Self {
        ValueNode::Keyed(IndexMap::new())
    }

    /// Fresh empty sequence node.
    pub fn seq() -> Self {
        ValueNode::Seq(Vec::new())
    }

    /// Fresh empty single-value node.
    pub fn single() -> Self {
        ValueNode::Single(None)
    }

    /// Fresh unresolved continuation slot.
    pub fn delegated() -> Self {
        ValueNode::Delegated(Box::new(None))
    }
}
