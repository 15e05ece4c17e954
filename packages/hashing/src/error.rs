//! Error handling for the hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, Error)]
pub enum HashError {
    /// A tag could not be parsed from its text form
    #[error("Invalid MAC tag: {0}")]
    InvalidTag(String),
}

impl HashError {
    /// Create an invalid tag error
    #[must_use]
    pub fn invalid_tag(msg: impl Into<String>) -> Self {
        Self::InvalidTag(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
