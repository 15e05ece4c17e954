//! Bit-level Base64 and Base64Url codec
//!
//! Inputs of several kinds are normalized into a bit stream, padded with
//! zero bits to a multiple of six, cut into sextets and mapped through a
//! 64-symbol [`Alphabet`]. Decoding goes the other way for text produced by
//! either alphabet.
//!
//! ```
//! use tessera_encoding::{Input, decode_url_safe, encode_url_safe};
//!
//! let encoded = encode_url_safe(&Input::from("Ma")).unwrap();
//! assert_eq!(encoded, "TWE");
//! assert_eq!(decode_url_safe(&encoded).unwrap(), b"Ma");
//! ```

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod bits;
pub mod codec;
pub mod error;
pub mod input;
pub mod record;

pub use alphabet::{Alphabet, PAD, map_to_alphabet};
pub use bits::{BitStream, SEXTET_BITS, Sextet, pad, split_into_chunks};
pub use codec::{Codec, decode_url_safe, encode, encode_url_safe};
pub use error::{CodecError, CodecResult};
pub use input::{Input, to_binary};
pub use record::{record_from_bytes, record_to_bytes};
