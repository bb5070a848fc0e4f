//! Small helpers for reading loosely-typed JSON.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::SchemaError;

pub(crate) fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integer-valued numbers render without a fractional part (`42.0` -> `"42"`).
pub(crate) fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Text form of a scalar; containers and null have none.
pub(crate) fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First candidate that is present (missing and `null` both count as absent).
pub(crate) fn first_present<'a>(candidates: &[&'a Option<Value>]) -> Option<&'a Value> {
    candidates.iter().find_map(|c| c.as_ref())
}

/// First present candidate rendered as text.
pub(crate) fn first_text(candidates: &[&Option<Value>]) -> Option<String> {
    first_present(candidates).and_then(scalar_text)
}

/// Value stored under the first key that exists in `obj`.
pub(crate) fn first_key<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

pub(crate) fn decode<T: DeserializeOwned>(
    collection: &'static str,
    v: &Value,
) -> Result<T, SchemaError> {
    if !v.is_object() {
        return Err(SchemaError::NotAnObject {
            collection,
            found: kind(v),
        });
    }
    T::deserialize(v).map_err(|e| SchemaError::Decode {
        collection,
        message: e.to_string(),
    })
}

/// Decode every element of an array-valued collection, skipping elements
/// that fail. Anything that is not an array reads as an empty collection.
pub(crate) fn decode_collection<T>(
    collection: &'static str,
    v: Option<&Value>,
    decode_one: impl Fn(&Value) -> Result<T, SchemaError>,
) -> Vec<T> {
    let Some(items) = v.and_then(Value::as_array) else {
        if let Some(other) = v {
            if !other.is_null() {
                tracing::debug!(
                    collection,
                    found = kind(other),
                    "non-array collection read as empty"
                );
            }
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match decode_one(item) {
            Ok(rec) => Some(rec),
            Err(err) => {
                tracing::debug!(collection, index, %err, "skipping malformed element");
                None
            }
        })
        .collect()
}
