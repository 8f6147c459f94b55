//! Position model representing one spot holding as reported by the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current spot position.
///
/// The record's shape belongs to the upstream API, so it is carried through
/// untouched. Field lookups are provided for display code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Value);

impl Position {
    /// Wrap a raw JSON record.
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Look up a top-level field, e.g. `"asset"` or `"free"`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a top-level string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Position {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
