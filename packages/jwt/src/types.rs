//! Header and claim set wrappers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm
    pub alg: String,
    /// Token type
    pub typ: String,
}

impl Header {
    /// Header with the given algorithm and type.
    #[must_use]
    pub fn new(alg: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            alg: alg.into(),
            typ: typ.into(),
        }
    }

    /// `{"alg":"HS256","typ":"JWT"}`
    #[must_use]
    pub fn hs256() -> Self {
        Self::new("HS256", "JWT")
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}

/// Claim set carried in the payload segment.
///
/// An arbitrary JSON object; no claim has built-in meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a claim, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a claim, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up a claim.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_serializes_in_field_order() {
        assert_eq!(
            serde_json::to_string(&Header::default()).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
    }

    #[test]
    fn claims_are_a_plain_object() {
        let claims = Claims::new().with("sub", "1").with("admin", true);
        assert_eq!(claims.len(), 2);
        assert_eq!(claims.get("sub"), Some(&Value::from("1")));
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"sub":"1","admin":true}"#
        );
    }

    #[test]
    fn claims_from_pairs() {
        let claims: Claims = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(claims.into_inner().len(), 2);
    }
}
