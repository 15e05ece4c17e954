//! Encoder and decoder over a chosen alphabet

use crate::alphabet::{Alphabet, map_to_alphabet};
use crate::bits::{BitStream, pad, split_into_chunks};
use crate::error::{CodecError, CodecResult};
use crate::input::{Input, to_binary};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Base64 codec bound to one [`Alphabet`].
///
/// Encoding runs normalize, pad, chunk and map in that order. Padding is
/// applied to bits rather than to symbol groups, so output never carries
/// `=` symbols and is `ceil(bits / 6)` characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    alphabet: &'static Alphabet,
}

impl Codec {
    /// Codec over `alphabet`.
    #[must_use]
    pub const fn new(alphabet: &'static Alphabet) -> Self {
        Self { alphabet }
    }

    /// Codec over [`Alphabet::STANDARD`].
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(&Alphabet::STANDARD)
    }

    /// Codec over [`Alphabet::URL_SAFE`].
    #[must_use]
    pub const fn url_safe() -> Self {
        Self::new(&Alphabet::URL_SAFE)
    }

    /// The alphabet this codec maps through.
    #[must_use]
    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Encode any supported input kind.
    pub fn encode(&self, input: &Input) -> CodecResult<String> {
        let bits = to_binary(input)?;
        let encoded = self.encode_bits(bits);
        tracing::trace!(
            kind = input.kind(),
            alphabet = self.alphabet.name(),
            symbols = encoded.len(),
            "Encoded input"
        );
        Ok(encoded)
    }

    /// Classify a dynamically typed value with [`Input::try_from`], then
    /// encode it.
    pub fn encode_value(&self, value: serde_json::Value) -> CodecResult<String> {
        self.encode(&Input::try_from(value)?)
    }

    /// Encode raw bytes. Cannot fail.
    #[must_use]
    pub fn encode_bytes(&self, bytes: &[u8]) -> String {
        self.encode_bits(BitStream::from_bytes(bytes.to_vec()))
    }

    fn encode_bits(&self, bits: BitStream) -> String {
        let chunks = split_into_chunks(&pad(bits));
        map_to_alphabet(&chunks, self.alphabet)
    }

    /// Decode text in this codec's alphabet back to bytes.
    ///
    /// Missing `=` padding is restored before decoding. Symbols outside the
    /// alphabet, impossible lengths and non-zero trailing bits are rejected.
    pub fn decode(&self, encoded: &str) -> CodecResult<Vec<u8>> {
        let standard = self.alphabet.to_standard(encoded).map_err(|bad| {
            CodecError::invalid_encoding(format!(
                "symbol {bad:?} is not in the {} alphabet",
                self.alphabet.name()
            ))
        })?;
        STANDARD
            .decode(standard.as_bytes())
            .map_err(|e| CodecError::invalid_encoding(e.to_string()))
    }
}

/// Encode with the standard alphabet.
pub fn encode(input: &Input) -> CodecResult<String> {
    Codec::standard().encode(input)
}

/// Encode with the URL-safe alphabet.
pub fn encode_url_safe(input: &Input) -> CodecResult<String> {
    Codec::url_safe().encode(input)
}

/// Decode URL-safe text, with or without trailing padding.
pub fn decode_url_safe(encoded: &str) -> CodecResult<Vec<u8>> {
    Codec::url_safe().decode(encoded)
}
