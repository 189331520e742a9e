//! Rendering a completed value tree to GraphQL literal text.

use crate::encoder::{encode_to_node_with_info, Encodable};
use crate::error::EncodeError;
use crate::node::ValueNode;
use crate::user_info::UserInfo;

/// Formatting switches supplied per render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap keys of keyed nodes in double quotes (JSON style).
    pub wrap_keys: bool,
    /// Print empty single-value slots as `null` instead of omitting them.
    pub encode_nils: bool,
}

impl RenderConfig {
    pub fn new(wrap_keys: bool, encode_nils: bool) -> Self {
        RenderConfig {
            wrap_keys,
            encode_nils,
        }
    }
}

/// Render a node under `config`.
///
/// `None` means the node produced no textual output at all, which callers
/// must keep distinct from the text `"null"`: an absent keyed entry is
/// dropped from its map, while an absent sequence element still occupies
/// its position as `null`.
pub fn render_node(node: &ValueNode, config: &RenderConfig) -> Option<String> {
    match node {
        ValueNode::Keyed(entries) => {
            if entries.is_empty() {
                return Some("{}".to_owned());
            }
            let mut parts = Vec::with_capacity(entries.len());
            for (key, child) in entries {
                let Some(rendered) = render_node(child, config) else {
                    continue;
                };
                if config.wrap_keys {
                    parts.push(format!("\"{key}\": {rendered}"));
                } else {
                    parts.push(format!("{key}: {rendered}"));
                }
            }
            Some(format!("{{{}}}", parts.join(",")))
        }
        ValueNode::Seq(items) => {
            if items.is_empty() {
                return Some("[]".to_owned());
            }
            let parts: Vec<String> = items
                .iter()
                .map(|item| render_node(item, config).unwrap_or_else(|| "null".to_owned()))
                .collect();
            Some(format!("[{}]", parts.join(",")))
        }
        ValueNode::Single(Some(text)) => Some(text.clone()),
        ValueNode::Single(None) => {
            if config.encode_nils {
                Some("null".to_owned())
            } else {
                None
            }
        }
        ValueNode::Raw(text) => Some(text.clone()),
        ValueNode::Delegated(slot) => match &**slot {
            Some(target) => render_node(target, config),
            None => None,
        },
    }
}

/// One-stop façade: encode a value and render the resulting tree.
#[derive(Debug)]
pub struct TextEncoder {
    pub wrap_keys: bool,
    pub encode_nils: bool,
    user_info: UserInfo,
}

impl Default for TextEncoder {
    /// JSON-style defaults: quoted keys, explicit nulls.
    fn default() -> Self {
        TextEncoder::new(true, true)
    }
}

impl TextEncoder {
    pub fn new(wrap_keys: bool, encode_nils: bool) -> Self {
        TextEncoder {
            wrap_keys,
            encode_nils,
            user_info: UserInfo::new(),
        }
    }

    /// Context visible to the root encoder of each [`TextEncoder::encode`]
    /// pass.
    pub fn user_info_mut(&mut self) -> &mut UserInfo {
        &mut self.user_info
    }

    /// Encode `value` and render it.
    ///
    /// `Ok(None)` is the "no textual output" outcome: the value either never
    /// requested a container, or everything it wrote rendered as absent.
    pub fn encode<T: Encodable + ?Sized>(&self, value: &T) -> Result<Option<String>, EncodeError> {
        let config = RenderConfig::new(self.wrap_keys, self.encode_nils);
        let node = encode_to_node_with_info(value, Some(&self.user_info))?;
        Ok(node.and_then(|node| render_node(&node, &config)))
    }
}
