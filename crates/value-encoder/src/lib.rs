//! Structural value encoder rendering typed nested data as GraphQL literals.
//!
//! Values describe themselves through the [`Encodable`] trait: an encode
//! routine receives a [`ValueEncoder`] and requests exactly one container
//! from it (keyed, sequence, or single-value). The pass accumulates a
//! [`ValueNode`] tree, which [`render_node`] turns into literal text with
//! unquoted or quoted keys and optional explicit nulls. [`TextEncoder`]
//! bundles the two steps.
//!
//! The encoder knows nothing about GraphQL documents; the companion
//! `graphql-builder` crate assembles operations on top of it.

pub mod containers;
mod encodable;
mod encoder;
mod error;
mod escape;
mod node;
mod render;
mod user_info;

pub use containers::{KeyedContainer, SeqContainer, SingleValueContainer};
pub use encodable::{or_null, OrNull, RawLiteral, Unquoted};
pub use encoder::{encode_to_node, encode_to_node_with_info, Encodable, ValueEncoder};
pub use error::EncodeError;
pub use escape::escape_special;
pub use node::ValueNode;
pub use render::{render_node, RenderConfig, TextEncoder};
pub use user_info::UserInfo;
