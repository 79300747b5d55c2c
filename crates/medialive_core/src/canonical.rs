//! The canonical property map handed to the host at synthesis.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::deferred::Deferred;
use crate::value::{Number, Value};

/// Wire-named map in declaration order. Equality ignores key order.
pub type CanonicalMap = IndexMap<String, Canonical>;

/// A projected value.
///
/// Mirrors [`Value`] with records flattened to maps. Deferred markers are
/// carried as the same shared handle the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum Canonical {
    String(String),
    Number(Number),
    Boolean(bool),
    Map(CanonicalMap),
    List(Vec<Canonical>),
    Deferred(Deferred),
}

impl Canonical {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Canonical::String(s.clone()),
            Value::Number(n) => Canonical::Number(*n),
            Value::Boolean(b) => Canonical::Boolean(*b),
            Value::Record(record) => Canonical::Map(record.to_canonical()),
            Value::List(items) => Canonical::List(items.iter().map(Canonical::from_value).collect()),
            Value::Deferred(deferred) => Canonical::Deferred(deferred.clone()),
        }
    }

    pub fn as_map(&self) -> Option<&CanonicalMap> {
        match self {
            Canonical::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Canonical]> {
        match self {
            Canonical::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_deferred(&self) -> Option<&Deferred> {
        match self {
            Canonical::Deferred(deferred) => Some(deferred),
            _ => None,
        }
    }

    /// Whether a deferred marker appears anywhere in this value.
    pub fn contains_deferred(&self) -> bool {
        match self {
            Canonical::Deferred(_) => true,
            Canonical::Map(map) => map.values().any(Canonical::contains_deferred),
            Canonical::List(items) => items.iter().any(Canonical::contains_deferred),
            _ => false,
        }
    }

    /// JSON form, with deferred markers resolved to their expressions.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Canonical::String(s) => JsonValue::String(s.clone()),
            Canonical::Number(n) => n.to_json(),
            Canonical::Boolean(b) => JsonValue::Bool(*b),
            Canonical::Map(map) => map_to_json(map),
            Canonical::List(items) => JsonValue::Array(items.iter().map(Canonical::to_json).collect()),
            Canonical::Deferred(deferred) => deferred.resolve(),
        }
    }
}

/// JSON form of a canonical map; see [`Canonical::to_json`].
pub fn map_to_json(map: &CanonicalMap) -> JsonValue {
    JsonValue::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}

impl Serialize for Canonical {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Canonical::String(s) => serializer.serialize_str(s),
            Canonical::Number(Number::Integer(n)) => serializer.serialize_i64(*n),
            Canonical::Number(Number::Float(n)) => serializer.serialize_f64(*n),
            Canonical::Boolean(b) => serializer.serialize_bool(*b),
            Canonical::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Canonical::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Canonical::Deferred(deferred) => deferred.resolve().serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::Intrinsic;
    use serde_json::json;

    #[test]
    fn test_map_equality_ignores_key_order() {
        let mut a = CanonicalMap::new();
        a.insert("name".into(), Canonical::String("ch1".into()));
        a.insert("logLevel".into(), Canonical::String("INFO".into()));

        let mut b = CanonicalMap::new();
        b.insert("logLevel".into(), Canonical::String("INFO".into()));
        b.insert("name".into(), Canonical::String("ch1".into()));

        assert_eq!(a, b);
    }

    #[test]
    fn test_serialize_resolves_deferred() {
        let marker = Deferred::new(Intrinsic::reference("Role"));
        let value = Canonical::List(vec![
            Canonical::Number(Number::Integer(1)),
            Canonical::Deferred(marker),
        ]);

        assert!(value.contains_deferred());
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([1, { "Ref": "Role" }]));
        assert_eq!(value.to_json(), json!([1, { "Ref": "Role" }]));
    }
}
