//! Internal value representation.
//!
//! `Variant` is the bridge's own dynamic value type, the representation
//! method arguments and results travel in between the bridge and the wrapped
//! native object. It is distinct from the host engine's value representation
//! ([`HostValue`](crate::host::HostValue)), which the bridge never interprets
//! directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A dynamically typed value crossing the bridge/native boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Variant {
    /// Null / absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (f64, matching what scripting engines round-trip)
    Number(f64),
    /// String value
    String(String),
    /// Ordered sequence of values
    Array(Vec<Variant>),
    /// String-keyed map of values
    Object(HashMap<String, Variant>),
}

impl Variant {
    /// Check whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    /// Get as boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Variant::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array.
    pub fn as_array(&self) -> Option<&[Variant]> {
        match self {
            Variant::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as object map.
    pub fn as_object(&self) -> Option<&HashMap<String, Variant>> {
        match self {
            Variant::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the contained type, for diagnostics and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Null => "null",
            Variant::Bool(_) => "bool",
            Variant::Number(_) => "number",
            Variant::String(_) => "string",
            Variant::Array(_) => "array",
            Variant::Object(_) => "object",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Null
    }
}

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::Bool(b)
    }
}

impl From<f64> for Variant {
    fn from(n: f64) -> Self {
        Variant::Number(n)
    }
}

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::String(s)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::String(s.to_string())
    }
}

impl<T: Into<Variant>> From<Vec<T>> for Variant {
    fn from(items: Vec<T>) -> Self {
        Variant::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Variant>> From<HashMap<String, T>> for Variant {
    fn from(map: HashMap<String, T>) -> Self {
        Variant::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
