//! Builder error type.

use graphql_value_encoder::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// An argument value could not be encoded. Carries the argument key and
    /// the underlying cause.
    #[error("failed to encode argument `{key}`")]
    Argument {
        key: String,
        #[source]
        source: EncodeError,
    },
    /// An operation was encoded through a bare encoder with no
    /// [`crate::DocumentConfig`] installed in the pass context.
    #[error("document configuration missing from the encoder pass context")]
    MissingDocumentConfig,
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
