//! Error types for the codec

use std::path::PathBuf;
use thiserror::Error;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not one of the kinds the codec can normalize
    #[error("Unsupported input kind: {0}")]
    UnsupportedInputKind(String),

    /// A text character has no 8-bit representation
    #[error("Character {ch:?} at index {index} does not fit in 8 bits")]
    CharOutOfRange {
        /// The offending character
        ch: char,
        /// Its position in the text, counted in characters
        index: usize,
    },

    /// A file input could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A record input could not be serialized
    #[error("Record serialization error: {0}")]
    Serialization(String),

    /// Encoded text is not valid for the alphabet
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl CodecError {
    /// Create an unsupported input kind error
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedInputKind(kind.into())
    }

    /// Create an invalid encoding error
    #[must_use]
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
