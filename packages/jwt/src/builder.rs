//! Reusable signer configuration

use crate::error::{JwtError, JwtResult};
use crate::token;
use crate::types::Header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tessera_hashing::Hs256;

/// Header and secret shared by every token it signs or checks.
///
/// ```
/// use tessera_jwt::{Claims, Jwt};
///
/// let jwt = Jwt::builder().with_secret(&[0u8; 32]);
/// let token = jwt.sign(&Claims::new().with("sub", "1")).unwrap();
/// let (_, claims): (_, Claims) = jwt.decode_verified(&token).unwrap();
/// assert_eq!(claims.get("sub").unwrap(), "1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JwtBuilder {
    header: Header,
    signer: Option<Hs256>,
}

impl JwtBuilder {
    /// Builder with the HS256 header and no secret.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the header.
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    /// Set the secret. The preprocessed key is zeroized on drop.
    #[must_use]
    pub fn with_secret(mut self, secret: &[u8]) -> Self {
        self.signer = Some(Hs256::new(secret));
        self
    }

    /// The configured header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    fn signer(&self) -> JwtResult<&Hs256> {
        self.signer.as_ref().ok_or(JwtError::MissingKey)
    }

    /// Sign `payload` under the configured header.
    pub fn sign<P: Serialize + ?Sized>(&self, payload: &P) -> JwtResult<String> {
        token::encode_with(self.signer()?, &self.header, payload)
    }

    /// Check the tag of `token`.
    pub fn verify(&self, token: &str) -> JwtResult<()> {
        token::verify_with(self.signer()?, token)
    }

    /// Check the tag, then decode.
    pub fn decode_verified<P: DeserializeOwned>(&self, token: &str) -> JwtResult<(Header, P)> {
        self.verify(token)?;
        token::decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn missing_secret_is_reported() {
        let builder = JwtBuilder::new();
        assert!(matches!(builder.sign(&json!({})), Err(JwtError::MissingKey)));
        assert!(matches!(builder.verify("a.b.c"), Err(JwtError::MissingKey)));
    }

    #[test]
    fn custom_header_is_carried() {
        let builder = JwtBuilder::new()
            .with_header(Header::new("HS256", "at+jwt"))
            .with_secret(b"k");
        let token = builder.sign(&json!({"sub": "1"})).unwrap();
        let (header, payload): (Header, Value) = builder.decode_verified(&token).unwrap();
        assert_eq!(header.typ, "at+jwt");
        assert_eq!(payload, json!({"sub": "1"}));
    }

    #[test]
    fn other_secret_rejects() {
        let token = JwtBuilder::new().with_secret(b"a").sign(&json!({})).unwrap();
        let other = JwtBuilder::new().with_secret(b"b");
        assert!(matches!(other.verify(&token), Err(JwtError::InvalidSignature)));
    }
}
