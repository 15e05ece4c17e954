//! Input kinds and their normalization into bits

use crate::bits::BitStream;
use crate::error::{CodecError, CodecResult};
use crate::record::record_to_bytes;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A value the codec can encode.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Binary numeral, most significant bit first, with no fixed width.
    Integer(u64),
    /// One 8-bit value per character. Only `U+0000..=U+00FF` is accepted.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Contents of a file, read when the input is normalized.
    File(PathBuf),
    /// Ordered record, serialized by [`record_to_bytes`] before encoding.
    Record(Map<String, Value>),
}

impl Input {
    /// Treat `text` as a file path when it names an existing regular file,
    /// and as text otherwise.
    ///
    /// The outcome depends on the filesystem at call time, so prefer
    /// [`Input::File`] or [`Input::Text`] when the intent is known.
    #[must_use]
    pub fn text_or_file(text: impl Into<String>) -> Self {
        let text = text.into();
        if Path::new(&text).is_file() {
            Input::File(PathBuf::from(text))
        } else {
            Input::Text(text)
        }
    }

    /// Name of this input's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Integer(_) => "integer",
            Input::Text(_) => "text",
            Input::Bytes(_) => "bytes",
            Input::File(_) => "file",
            Input::Record(_) => "record",
        }
    }
}

impl From<u64> for Input {
    fn from(value: u64) -> Self {
        Input::Integer(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_owned())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl From<Map<String, Value>> for Input {
    fn from(value: Map<String, Value>) -> Self {
        Input::Record(value)
    }
}

/// Classify a dynamically typed value.
///
/// Non-negative integers, strings, objects and arrays of byte values are
/// accepted. Everything else fails with
/// [`CodecError::UnsupportedInputKind`] naming what was found.
impl TryFrom<Value> for Input {
    type Error = CodecError;

    fn try_from(value: Value) -> CodecResult<Self> {
        match value {
            Value::Number(number) => match number.as_u64() {
                Some(n) => Ok(Input::Integer(n)),
                None if number.is_f64() => Err(CodecError::unsupported(format!("float ({number})"))),
                None => Err(CodecError::unsupported(format!("negative integer ({number})"))),
            },
            Value::String(text) => Ok(Input::Text(text)),
            Value::Object(record) => Ok(Input::Record(record)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Input::Bytes)
                .ok_or_else(|| CodecError::unsupported("array of non-byte values")),
            Value::Bool(_) => Err(CodecError::unsupported("bool")),
            Value::Null => Err(CodecError::unsupported("null")),
        }
    }
}

/// Normalize `input` into its bit-level representation.
pub fn to_binary(input: &Input) -> CodecResult<BitStream> {
    match input {
        Input::Integer(value) => Ok(BitStream::from_integer(*value)),
        Input::Text(text) => latin1_bytes(text).map(BitStream::from_bytes),
        Input::Bytes(bytes) => Ok(BitStream::from_bytes(bytes.clone())),
        Input::File(path) => {
            let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), len = bytes.len(), "Read file input");
            Ok(BitStream::from_bytes(bytes))
        }
        Input::Record(record) => record_to_bytes(record).map(BitStream::from_bytes),
    }
}

fn latin1_bytes(text: &str) -> CodecResult<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| CodecError::CharOutOfRange { ch, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_uses_one_byte_per_char() {
        let bits = to_binary(&Input::from("é")).unwrap();
        assert_eq!(bits.to_string(), "11101001");
    }

    #[test]
    fn text_rejects_wide_chars() {
        let err = to_binary(&Input::from("ok€")).unwrap_err();
        assert!(matches!(err, CodecError::CharOutOfRange { ch: '€', index: 2 }));
    }

    #[test]
    fn integer_bits() {
        assert_eq!(to_binary(&Input::from(5u64)).unwrap().to_string(), "101");
    }

    #[test]
    fn dynamic_values_are_classified() {
        assert_eq!(Input::try_from(json!(7)).unwrap(), Input::Integer(7));
        assert_eq!(Input::try_from(json!("hi")).unwrap(), Input::Text("hi".into()));
        assert_eq!(Input::try_from(json!([1, 255])).unwrap(), Input::Bytes(vec![1, 255]));
        assert_eq!(Input::try_from(json!({"a": 1})).unwrap().kind(), "record");
    }

    #[test]
    fn float_is_unsupported() {
        let err = Input::try_from(json!(1.5)).unwrap_err();
        assert!(matches!(&err, CodecError::UnsupportedInputKind(kind) if kind.starts_with("float")));
        assert!(err.to_string().contains("float"));
    }

    #[test]
    fn other_dynamic_kinds_are_unsupported() {
        for value in [json!(-3), json!(true), json!(null), json!([256]), json!(["a"])] {
            assert!(matches!(
                Input::try_from(value),
                Err(CodecError::UnsupportedInputKind(_))
            ));
        }
    }

    #[test]
    fn record_order_is_preserved() {
        let mut first = Map::new();
        first.insert("b".into(), json!(2));
        first.insert("a".into(), json!("x"));
        let mut second = Map::new();
        second.insert("a".into(), json!("x"));
        second.insert("b".into(), json!(2));

        let first_bits = to_binary(&Input::Record(first.clone())).unwrap();
        assert_ne!(first_bits, to_binary(&Input::Record(second)).unwrap());
        assert_eq!(first_bits, to_binary(&Input::Record(first)).unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = to_binary(&Input::File(PathBuf::from("/definitely/not/here"))).unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
    }

    #[test]
    fn text_or_file_falls_back_to_text() {
        assert_eq!(
            Input::text_or_file("not a path on disk"),
            Input::Text("not a path on disk".into())
        );
    }
}
