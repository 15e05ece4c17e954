//! Stateful token holder

use crate::builder::JwtBuilder;
use crate::error::{JwtError, JwtResult};
use crate::token;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use zeroize::Zeroizing;

/// A header, payload and secret together with the last token built from them.
///
/// [`Jwt::decode`] reads the stored token, so it fails with
/// [`JwtError::NoToken`] until [`Jwt::encode`] has succeeded. The free
/// functions in [`crate::token`] take the token as an argument instead.
pub struct Jwt {
    header: Value,
    payload: Value,
    secret: Zeroizing<Vec<u8>>,
    token: Option<String>,
}

impl Jwt {
    /// Capture `header` and `payload` as JSON.
    pub fn new<H, P>(header: &H, payload: &P, secret: &[u8]) -> JwtResult<Self>
    where
        H: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let header = serde_json::to_value(header)
            .map_err(|e| JwtError::serialization(format!("Failed to serialize header: {e}")))?;
        let payload = serde_json::to_value(payload)
            .map_err(|e| JwtError::serialization(format!("Failed to serialize payload: {e}")))?;
        Ok(Self {
            header,
            payload,
            secret: Zeroizing::new(secret.to_vec()),
            token: None,
        })
    }

    /// Configurable signer that does not retain tokens.
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Build, store and return the token.
    pub fn encode(&mut self) -> JwtResult<&str> {
        let token = token::encode(&self.header, &self.payload, &self.secret)?;
        let token = self.token.insert(token);
        Ok(token.as_str())
    }

    /// Header and payload of the stored token. The tag is not checked.
    pub fn decode(&self) -> JwtResult<(Value, Value)> {
        token::decode(self.current()?)
    }

    /// Check the stored token against this holder's secret.
    pub fn verify(&self) -> JwtResult<()> {
        token::verify(self.current()?, &self.secret)
    }

    /// The stored token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn current(&self) -> JwtResult<&str> {
        self.token.as_deref().ok_or(JwtError::NoToken)
    }
}

impl fmt::Debug for Jwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwt")
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("secret", &"..")
            .field("token", &self.token)
            .finish()
    }
}
