//! HMAC-SHA256 built directly on the SHA-256 compression function
//!
//! The key is brought to the 64-byte block size, XORed with the inner and
//! outer pads, and two SHA-256 passes produce the tag:
//! `H((K ^ opad) || H((K ^ ipad) || message))`.

use crate::tag::MacTag;
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// SHA-256 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// SHA-256 digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A secret key brought to exactly [`BLOCK_SIZE`] bytes.
///
/// Longer keys are replaced by their SHA-256 digest, shorter keys are
/// right-padded with zeros. Preprocessing a block-sized key is a no-op, so
/// feeding a prepared block back through [`SigningKey::new`] is idempotent.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    block: [u8; BLOCK_SIZE],
}

impl SigningKey {
    /// Preprocess `key` for signing.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            block[..DIGEST_SIZE].copy_from_slice(&Sha256::digest(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }
        Self { block }
    }

    fn xor_pad(&self, pad: u8) -> Zeroizing<[u8; BLOCK_SIZE]> {
        let mut padded = Zeroizing::new(self.block);
        padded.iter_mut().for_each(|byte| *byte ^= pad);
        padded
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// HS256 signer holding a preprocessed key.
///
/// Reusable across messages; every call derives its padded keys fresh.
#[derive(Clone, Debug)]
pub struct Hs256 {
    key: SigningKey,
}

impl Hs256 {
    /// Signer for `key`, which may be any length.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: SigningKey::new(key),
        }
    }

    /// Tag for `message`.
    pub fn sign(&self, message: impl AsRef<[u8]>) -> MacTag {
        let message = message.as_ref();
        let inner_key = self.key.xor_pad(IPAD);
        let outer_key = self.key.xor_pad(OPAD);

        let inner = Sha256::new()
            .chain_update(inner_key.as_slice())
            .chain_update(message)
            .finalize();
        let outer = Sha256::new()
            .chain_update(outer_key.as_slice())
            .chain_update(inner)
            .finalize();

        tracing::trace!(message_len = message.len(), "Computed HS256 tag");
        MacTag::from_bytes(outer.into())
    }

    /// Whether `tag` authenticates `message`. Constant-time in the tag.
    #[must_use]
    pub fn verify(&self, message: impl AsRef<[u8]>, tag: &MacTag) -> bool {
        self.sign(message) == *tag
    }

    /// Like [`Hs256::verify`] for a hex tag. Malformed hex never verifies.
    #[must_use]
    pub fn verify_hex(&self, message: impl AsRef<[u8]>, tag: &str) -> bool {
        MacTag::from_hex(tag).is_ok_and(|tag| self.verify(message, &tag))
    }
}

/// Sign `message` with `key`, returning 64 lowercase hex characters.
#[must_use]
pub fn sign(message: impl AsRef<[u8]>, key: &[u8]) -> String {
    Hs256::new(key).sign(message).to_hex()
}

/// Check a hex tag produced by [`sign`].
#[must_use]
pub fn verify(message: impl AsRef<[u8]>, key: &[u8], tag: &str) -> bool {
    Hs256::new(key).verify_hex(message, tag)
}
