use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Untyped quantity scalar as it arrives from the data layer.
///
/// Wire mapping (JSON):
/// - `null` / missing field -> `Absent`
/// - number -> `Number`
/// - string -> `Text`
/// - bool -> `Text("true" | "false")` (reads as 0)
/// - array / object -> `Absent`
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QuantityInput {
    #[default]
    Absent,
    Number(f64),
    Text(String),
}

impl QuantityInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, QuantityInput::Absent)
    }
}

impl From<f64> for QuantityInput {
    fn from(v: f64) -> Self {
        QuantityInput::Number(v)
    }
}

impl From<i64> for QuantityInput {
    fn from(v: i64) -> Self {
        QuantityInput::Number(v as f64)
    }
}

impl From<&str> for QuantityInput {
    fn from(v: &str) -> Self {
        QuantityInput::Text(v.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(v: String) -> Self {
        QuantityInput::Text(v)
    }
}

impl<T: Into<QuantityInput>> From<Option<T>> for QuantityInput {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

impl Serialize for QuantityInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuantityInput::Absent => serializer.serialize_none(),
            QuantityInput::Number(n) => serializer.serialize_f64(*n),
            QuantityInput::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = QuantityInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quantity (number, string, or null)")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QuantityInput::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QuantityInput::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(QuantityVisitor)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(QuantityInput::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(QuantityInput::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(QuantityInput::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(QuantityInput::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(QuantityInput::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(QuantityInput::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(QuantityInput::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(QuantityInput::Absent)
    }
}

impl<'de> Deserialize<'de> for QuantityInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}
