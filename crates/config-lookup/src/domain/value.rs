//! The tagged result of a config lookup.
//!
//! JSON values are dynamically typed: the same key may hold a string in one
//! file and a number in another.  Instead of handing callers a loosely typed
//! value and letting them inspect it at runtime, [`ConfigValue`] spells out every
//! possible shape as an enum variant, plus one extra variant, `Absent`, for
//! "no value could be produced".
//!
//! # Pattern matching (for beginners)
//!
//! ```rust
//! use config_lookup::ConfigValue;
//! use serde_json::json;
//!
//! let value = ConfigValue::from(json!(3));
//! let retries = match value {
//!     ConfigValue::Number(n) => n.as_u64().unwrap_or(0),
//!     ConfigValue::Absent => 0,
//!     _ => 0,
//! };
//! assert_eq!(retries, 3);
//! ```

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// A single top-level value read from `config.json`, or `Absent`.
///
/// Serializes as plain JSON (the variant tag is not written).  `Absent`
/// serializes as `null`, so use [`ConfigValue::into_json`] when the
/// difference between `null` and "missing" matters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A JSON string.
    String(String),
    /// A JSON number, kept in `serde_json`'s lossless representation.
    Number(Number),
    /// `true` or `false`.
    Boolean(bool),
    /// A nested JSON object, returned verbatim.
    Object(Map<String, Value>),
    /// A JSON array, returned verbatim.
    Array(Vec<Value>),
    /// An explicit JSON `null` stored under the key.
    Null,
    /// No value could be produced: the key is missing or the file could not be used.
    Absent,
}

impl ConfigValue {
    /// Returns `true` for [`ConfigValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for every variant except [`ConfigValue::Absent`].
    ///
    /// An explicit JSON `null` counts as present.
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Human-readable name of the variant, e.g. `"string"` or `"absent"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Null => "null",
            Self::Absent => "absent",
        }
    }

    /// Converts back into a `serde_json::Value`, mapping `Absent` to `None`.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::String(s) => Some(Value::String(s)),
            Self::Number(n) => Some(Value::Number(n)),
            Self::Boolean(b) => Some(Value::Bool(b)),
            Self::Object(map) => Some(Value::Object(map)),
            Self::Array(items) => Some(Value::Array(items)),
            Self::Null => Some(Value::Null),
            Self::Absent => None,
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Boolean(b),
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            Value::Null => Self::Null,
        }
    }
}

impl From<Option<Value>> for ConfigValue {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

/// Name of a parsed JSON value's type, used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::Null => "null",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
