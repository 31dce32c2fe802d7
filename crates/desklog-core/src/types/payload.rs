//! Log message payloads

use serde::Serialize;

use crate::error::LogResult;

/// Message body handed to a logger
///
/// Structured values (maps, sequences) are kept as JSON and rendered in
/// their compact canonical form; everything else is plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Plain text content
    Text(String),
    /// Structured content rendered as JSON
    Structured(serde_json::Value),
}

impl Payload {
    /// Create a text payload from anything that implements `Display`
    pub fn display(value: impl std::fmt::Display) -> Self {
        Payload::Text(value.to_string())
    }

    /// Serialize a value into a payload
    ///
    /// Field and key order follow the value's own serialization.
    /// Fails with `LogError::Serialization` when the value cannot be
    /// represented as JSON (e.g. a map with non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> LogResult<Self> {
        let value = serde_json::to_value(value)?;
        Ok(Self::from(value))
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Text(s) => f.write_str(s),
            Payload::Structured(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<&String> for Payload {
    fn from(s: &String) -> Self {
        Payload::Text(s.clone())
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Payload::Text(s),
            other => Payload::Structured(other),
        }
    }
}
