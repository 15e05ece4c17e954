//! Token assembly: `<b64url(header)>.<b64url(payload)>.<hex tag>`
//!
//! [`decode`] only restores the header and payload; it does not look at the
//! tag. Use [`verify`] or [`decode_verified`] before trusting the contents.

use crate::error::{JwtError, JwtResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tessera_encoding::Codec;
use tessera_hashing::{Hs256, MacTag};

/// Separator between token segments.
pub const SEPARATOR: char = '.';

const CODEC: Codec = Codec::url_safe();

/// Serialize, encode and sign `header` and `payload` with `secret`.
pub fn encode<H, P>(header: &H, payload: &P, secret: &[u8]) -> JwtResult<String>
where
    H: Serialize + ?Sized,
    P: Serialize + ?Sized,
{
    encode_with(&Hs256::new(secret), header, payload)
}

pub(crate) fn encode_with<H, P>(signer: &Hs256, header: &H, payload: &P) -> JwtResult<String>
where
    H: Serialize + ?Sized,
    P: Serialize + ?Sized,
{
    let header = encode_segment(header, "header")?;
    let payload = encode_segment(payload, "payload")?;
    let signing_input = format!("{header}{SEPARATOR}{payload}");
    let tag = signer.sign(&signing_input);

    tracing::debug!(
        header_len = header.len(),
        payload_len = payload.len(),
        "Issued HS256 token"
    );
    Ok(format!("{signing_input}{SEPARATOR}{tag}"))
}

fn encode_segment<T: Serialize + ?Sized>(value: &T, name: &str) -> JwtResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| JwtError::serialization(format!("Failed to serialize {name}: {e}")))?;
    Ok(CODEC.encode_bytes(&json))
}

/// Split `token` and decode its header and payload without checking the tag.
pub fn decode<H, P>(token: &str) -> JwtResult<(H, P)>
where
    H: DeserializeOwned,
    P: DeserializeOwned,
{
    let segments = Segments::parse(token)?;
    let header = decode_segment(segments.header, "header")?;
    let payload = decode_segment(segments.payload, "payload")?;
    tracing::trace!("Decoded token segments");
    Ok((header, payload))
}

fn decode_segment<T: DeserializeOwned>(segment: &str, name: &str) -> JwtResult<T> {
    let json = CODEC
        .decode(segment)
        .map_err(|e| JwtError::malformed(format!("{name} segment: {e}")))?;
    serde_json::from_slice(&json)
        .map_err(|e| JwtError::malformed(format!("{name} segment is not the expected JSON: {e}")))
}

/// Check the tag of `token` against `secret`.
pub fn verify(token: &str, secret: &[u8]) -> JwtResult<()> {
    verify_with(&Hs256::new(secret), token)
}

pub(crate) fn verify_with(signer: &Hs256, token: &str) -> JwtResult<()> {
    let segments = Segments::parse(token)?;
    let tag = MacTag::from_hex(segments.tag)
        .map_err(|e| JwtError::malformed(format!("signature segment: {e}")))?;
    if signer.verify(segments.signing_input, &tag) {
        Ok(())
    } else {
        Err(JwtError::InvalidSignature)
    }
}

/// [`verify`], then [`decode`].
pub fn decode_verified<H, P>(token: &str, secret: &[u8]) -> JwtResult<(H, P)>
where
    H: DeserializeOwned,
    P: DeserializeOwned,
{
    verify(token, secret)?;
    decode(token)
}

struct Segments<'a> {
    signing_input: &'a str,
    header: &'a str,
    payload: &'a str,
    tag: &'a str,
}

impl<'a> Segments<'a> {
    fn parse(token: &'a str) -> JwtResult<Self> {
        let count = token.split(SEPARATOR).count();
        if count != 3 {
            return Err(JwtError::malformed(format!(
                "expected 3 segments, found {count}"
            )));
        }
        let Some((signing_input, tag)) = token.rsplit_once(SEPARATOR) else {
            return Err(JwtError::malformed("missing signature segment"));
        };
        let Some((header, payload)) = signing_input.split_once(SEPARATOR) else {
            return Err(JwtError::malformed("missing payload segment"));
        };
        Ok(Self {
            signing_input,
            header,
            payload,
            tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const SECRET: [u8; 32] = [0; 32];

    #[test]
    fn segment_count_is_enforced() {
        for token in ["", "a", "a.b", "a.b.c.d", "..."] {
            assert!(matches!(
                Segments::parse(token),
                Err(JwtError::MalformedToken(_))
            ));
        }
        let segments = Segments::parse("h.p.t").unwrap();
        assert_eq!(
            (segments.signing_input, segments.header, segments.payload, segments.tag),
            ("h.p", "h", "p", "t")
        );
    }

    #[test]
    fn header_segment_is_base64url_json() {
        let token = encode(&json!({"alg": "HS256", "typ": "JWT"}), &json!({}), &SECRET).unwrap();
        assert!(token.starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));
    }

    #[test]
    fn tag_is_hex_over_signing_input() {
        let token = encode(&json!({}), &json!({"sub": "1"}), &SECRET).unwrap();
        let (signing_input, tag) = token.rsplit_once('.').unwrap();
        assert_eq!(tag, tessera_hashing::sign(signing_input, &SECRET));
    }

    #[test]
    fn bad_segment_encoding_is_malformed() {
        let err = decode::<Value, Value>("e*J9.e30.00").unwrap_err();
        assert!(matches!(err, JwtError::MalformedToken(msg) if msg.starts_with("header")));
    }

    #[test]
    fn non_json_segment_is_malformed() {
        let not_json = CODEC.encode_bytes(b"not json");
        let token = format!("{not_json}.{not_json}.00");
        assert!(matches!(
            decode::<Value, Value>(&token),
            Err(JwtError::MalformedToken(_))
        ));
    }

    #[test]
    fn non_hex_tag_is_malformed() {
        let token = encode(&json!({}), &json!({}), &SECRET).unwrap();
        let (signing_input, _) = token.rsplit_once('.').unwrap();
        let forged = format!("{signing_input}.zz");
        assert!(matches!(verify(&forged, &SECRET), Err(JwtError::MalformedToken(_))));
    }
}
