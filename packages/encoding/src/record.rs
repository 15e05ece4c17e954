//! Byte form of the record input kind
//!
//! Records go through a tagged mirror of the JSON value tree before bincode
//! sees them. bincode writes no type information of its own, so the tag is
//! what keeps `true` apart from `1` and `"x"` apart from `[120]`. Objects
//! become ordered pair lists so insertion order survives.

use crate::error::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Serialize, Deserialize)]
enum RecordValue {
    Null,
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    String(String),
    Array(Vec<RecordValue>),
    Object(Vec<(String, RecordValue)>),
}

impl From<&Value> for RecordValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RecordValue::Null,
            Value::Bool(b) => RecordValue::Bool(*b),
            Value::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(u), _) => RecordValue::Unsigned(u),
                (None, Some(i)) => RecordValue::Signed(i),
                (None, None) => RecordValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => RecordValue::String(s.clone()),
            Value::Array(items) => RecordValue::Array(items.iter().map(Self::from).collect()),
            Value::Object(map) => RecordValue::Object(pairs(map)),
        }
    }
}

fn pairs(map: &Map<String, Value>) -> Vec<(String, RecordValue)> {
    map.iter().map(|(k, v)| (k.clone(), RecordValue::from(v))).collect()
}

impl TryFrom<RecordValue> for Value {
    type Error = CodecError;

    fn try_from(value: RecordValue) -> CodecResult<Self> {
        Ok(match value {
            RecordValue::Null => Value::Null,
            RecordValue::Bool(b) => Value::Bool(b),
            RecordValue::Unsigned(u) => Value::from(u),
            RecordValue::Signed(i) => Value::from(i),
            RecordValue::Float(f) => Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| CodecError::Serialization(format!("non-finite number {f}")))?,
            RecordValue::String(s) => Value::String(s),
            RecordValue::Array(items) => Value::Array(
                items.into_iter().map(Value::try_from).collect::<CodecResult<_>>()?,
            ),
            RecordValue::Object(entries) => Value::Object(object(entries)?),
        })
    }
}

fn object(entries: Vec<(String, RecordValue)>) -> CodecResult<Map<String, Value>> {
    entries
        .into_iter()
        .map(|(k, v)| Ok((k, Value::try_from(v)?)))
        .collect()
}

/// Serialize `record`, keeping value kinds and key order.
pub fn record_to_bytes(record: &Map<String, Value>) -> CodecResult<Vec<u8>> {
    bincode::serde::encode_to_vec(RecordValue::Object(pairs(record)), bincode::config::standard())
        .map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Inverse of [`record_to_bytes`].
pub fn record_from_bytes(bytes: &[u8]) -> CodecResult<Map<String, Value>> {
    let (value, read): (RecordValue, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map_err(|e| CodecError::Serialization(e.to_string()))?;
    if read != bytes.len() {
        return Err(CodecError::Serialization(format!(
            "{} trailing bytes after record",
            bytes.len() - read
        )));
    }
    match value {
        RecordValue::Object(entries) => object(entries),
        _ => Err(CodecError::Serialization("bytes do not hold a record".into())),
    }
}
