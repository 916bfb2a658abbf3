//! Error types for the Tessera core contracts.

use thiserror::Error;

/// Errors that can occur while constructing tokens or working with key
/// material and issuer chains.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A required argument was absent. The only fatal construction failure:
    /// a token cannot exist without its backing assertion.
    #[error("argument cannot be null: {arg}")]
    ArgumentNull { arg: &'static str },

    /// Key material could not be decoded.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// A token with the same id is already registered in the chain registry.
    #[error("token id already registered: {id}")]
    DuplicateTokenId { id: String },

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl TokenError {
    /// Log and build a [`TokenError::ArgumentNull`] for the named argument.
    pub fn argument_null(arg: &'static str) -> Self {
        tracing::error!(argument = arg, "required argument was null");
        TokenError::ArgumentNull { arg }
    }
}
