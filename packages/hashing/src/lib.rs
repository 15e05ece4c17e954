//! HMAC-SHA256 message authentication
//!
//! The keyed-hash construction is written out over [`sha2::Sha256`] so the
//! key preprocessing and the two hash passes are explicit. Tags compare in
//! constant time.
//!
//! ```
//! use tessera_hashing::{sign, verify};
//!
//! let tag = sign("header.payload", b"secret");
//! assert_eq!(tag.len(), 64);
//! assert!(verify("header.payload", b"secret", &tag));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod hmac;
pub mod tag;

pub use error::{HashError, Result};
pub use hmac::{BLOCK_SIZE, DIGEST_SIZE, Hs256, SigningKey, sign, verify};
pub use tag::MacTag;
