//! Programmatic builder for GraphQL query and mutation documents.
//!
//! Documents are assembled as plain trees of [`Field`]s, [`Fragment`]s,
//! [`InlineFragment`]s, and [`Variable`]s under an [`Operation`], then
//! rendered either compactly or indented. Argument and variable values are
//! arbitrary [`Encodable`] types serialized through the companion
//! `graphql-value-encoder` crate; the [`request`] module packages an
//! operation into transport-ready payloads.
//!
//! ```
//! use graphql_builder::{Field, Operation};
//!
//! let operation = Operation::query()
//!     .with_name("Products")
//!     .with_selection(
//!         Field::new("products")
//!             .with_argument("first", 10i64)
//!             .with_selection(Field::new("id"))
//!             .with_selection(Field::new("title")),
//!     );
//! assert_eq!(
//!     operation.render().unwrap(),
//!     "query Products{products(first:10){id title}}"
//! );
//! ```

mod config;
mod error;
mod field;
mod fragment;
mod inline_fragment;
mod operation;
pub mod request;
mod selection;
mod typename;
mod variable;

pub use config::DocumentConfig;
pub use error::BuildError;
pub use field::Field;
pub use fragment::{Fragment, FragmentSpread};
pub use inline_fragment::InlineFragment;
pub use operation::{Operation, OperationKind};
pub use request::QueryParams;
pub use selection::Selection;
pub use typename::GraphqlTypeName;
pub use variable::Variable;

pub use graphql_value_encoder::{
    or_null, Encodable, EncodeError, OrNull, RawLiteral, TextEncoder, Unquoted, ValueEncoder,
};
