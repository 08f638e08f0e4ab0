use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::value::integral_digits;
use crate::{Map, Value};

impl Serialize for Value {
    /// Methods and non-finite floats are not representable and are written as `null`.
    /// Map members holding a method are left out entirely.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Method(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) if !f.is_finite() => serializer.serialize_unit(),
            Value::Float(f) => match integral_digits(*f) {
                Some(i) => serializer.serialize_i128(i),
                None => serializer.serialize_f64(*f),
            },
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(list) => serializer.collect_seq(list),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let members = || self.iter().filter(|(_, value)| !matches!(value, Value::Method(_)));
        let mut map = serializer.serialize_map(Some(members().count()))?;
        for (key, value) in members() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or_default(),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(list) => list.into_iter().collect(),
            serde_json::Value::Object(object) => Value::Map(object.into_iter().collect()),
        }
    }
}

impl Value {
    /// Parse JSON text.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Write the value as JSON text, compact when `indent` is `None` or empty.
    pub fn to_json_string(&self, indent: Option<&str>) -> serde_json::Result<String> {
        let indent = indent.filter(|indent| !indent.is_empty());
        let Some(indent) = indent else { return serde_json::to_string(self) };

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(serde_json::Error::custom)
    }
}
