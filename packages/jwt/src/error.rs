//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    /// Decode was requested before any token was encoded
    #[error("The token does not exist yet, encode it first")]
    NoToken,
    /// Token is not three well-formed segments
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    /// Signature does not match the signing input
    #[error("Invalid token signature")]
    InvalidSignature,
    /// No secret was configured
    #[error("Missing signing secret")]
    MissingKey,
    /// Header or payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        JwtError::MalformedToken(msg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        JwtError::Serialization(msg.into())
    }
}
