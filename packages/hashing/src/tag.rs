//! Authentication tag produced by the signer

use crate::error::{HashError, Result};
use crate::hmac::DIGEST_SIZE;
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// 256-bit message authentication code.
///
/// Equality is constant-time. The text form is 64 lowercase hex characters.
#[derive(Clone, Copy)]
pub struct MacTag([u8; DIGEST_SIZE]);

impl MacTag {
    /// Wrap a raw digest.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse the hex form. Either case is accepted.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(text, &mut bytes).map_err(|e| HashError::invalid_tag(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl PartialEq for MacTag {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for MacTag {}

impl fmt::Display for MacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacTag({self})")
    }
}

impl FromStr for MacTag {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
