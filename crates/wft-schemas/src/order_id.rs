use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::json::number_text;

/// Opaque order identifier, held in canonical text form.
///
/// The data layer stores ids as strings in some collections and numbers in
/// others; `42` and `"42"` resolve to the same `OrderId`. Values that are
/// falsy upstream (`null`, `false`, `""`, `0`) never resolve.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// `None` for the empty string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(OrderId(id))
        }
    }

    /// Resolve an identifier from a raw JSON value.
    pub fn from_json(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => OrderId::new(s.as_str()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(OrderId(number_text(n))),
            Value::Bool(true) => Some(OrderId("true".to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
