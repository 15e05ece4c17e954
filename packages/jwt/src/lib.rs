//! HS256 JSON Web Tokens
//!
//! A token is three `.`-joined segments: the URL-safe Base64 encoding of the
//! header JSON, the same for the payload JSON, and the lowercase hex
//! HMAC-SHA256 tag over the first two segments joined by `.`.
//!
//! - [`token`] has the pure operations: [`encode`], [`decode`], [`verify`]
//!   and [`decode_verified`].
//! - [`Jwt`] keeps the last encoded token, for callers that build once and
//!   decode later.
//! - [`JwtBuilder`] holds a header and secret for repeated signing.
//!
//! [`decode`] does not check the tag.

#![forbid(unsafe_code)]

mod assembler;
mod builder;
mod error;
pub mod token;
mod types;

pub use assembler::Jwt;
pub use builder::JwtBuilder;
pub use error::{JwtError, JwtResult};
pub use token::{decode, decode_verified, encode, verify};
pub use types::{Claims, Header};
