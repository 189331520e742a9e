//! Encoder error type.

use thiserror::Error;

/// Failure raised by an [`crate::Encodable`] implementation.
///
/// "The value wrote nothing" is not an error; that outcome is the `None`
/// returned by [`crate::encode_to_node`] and [`crate::TextEncoder::encode`].
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl EncodeError {
    /// Error from a plain message.
    pub fn message(msg: impl Into<String>) -> Self {
        EncodeError::Message(msg.into())
    }

    /// Error wrapping a foreign cause.
    pub fn custom(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        EncodeError::Custom(Box::new(err))
    }
}
