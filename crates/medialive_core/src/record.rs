//! Records: immutable named-field values checked against a [`RecordSchema`].
//!
//! Every record kind shares this one implementation of construction,
//! equality, debug representation and projection. The typed facades
//! generated by [`define_records!`](crate::define_records) wrap a [`Record`]
//! and forward to it.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::trace;

use crate::canonical::{Canonical, CanonicalMap};
use crate::error::{ShapeError, ShapeResult};
use crate::schema::{FieldSpec, RecordSchema, Shape};
use crate::value::Value;

/// An immutable record of one kind.
///
/// Only present fields are stored, keyed by their declaration index, so
/// iteration always follows the schema's field order.
#[derive(Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    values: BTreeMap<usize, Value>,
}

impl Record {
    /// A record of the given kind with no fields present.
    pub fn empty(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
        }
    }

    /// Build a record from keyword-style bindings.
    ///
    /// Names may be in-language (`coding_mode`) or wire (`codingMode`)
    /// names. A `None` value leaves the field absent. Every value is checked
    /// against the field's structural contract.
    pub fn from_bindings<I, K, V>(schema: &'static RecordSchema, bindings: I) -> ShapeResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<Value>>,
    {
        let mut record = Self::empty(schema);
        for (name, value) in bindings {
            record.bind(name.as_ref(), value.into())?;
        }
        trace!(
            "Built {} with {} field(s)",
            schema.name,
            record.values.len()
        );
        Ok(record)
    }

    /// Record kind name.
    pub fn kind(&self) -> &'static str {
        self.schema.name
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    pub fn is_kind(&self, schema: &RecordSchema) -> bool {
        self.schema.same_kind(schema)
    }

    /// Stored value of a field, by in-language or wire name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema
            .resolve_field(name)
            .and_then(|(index, _)| self.values.get(&index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &Value)> + '_ {
        let fields = self.schema.fields;
        self.values
            .iter()
            .map(move |(index, value)| (&fields[*index], value))
    }

    /// A copy of this record with one field rebound (or cleared with `None`).
    pub fn with(mut self, name: &str, value: impl Into<Option<Value>>) -> ShapeResult<Self> {
        self.bind(name, value.into())?;
        Ok(self)
    }

    /// A copy of this record with one field cleared.
    pub fn without(self, name: &str) -> ShapeResult<Self> {
        self.with(name, None)
    }

    /// Rebind a field whose value is already known to satisfy its contract.
    ///
    /// Used by the typed builders, whose argument types enforce the
    /// contract at compile time.
    #[doc(hidden)]
    pub fn with_unchecked(mut self, name: &str, value: Value) -> Self {
        match self.schema.field(name) {
            Some((index, _)) => {
                self.values.insert(index, value);
            }
            None => debug_assert!(false, "{} has no field `{}`", self.schema.name, name),
        }
        self
    }

    fn bind(&mut self, name: &str, value: Option<Value>) -> ShapeResult<()> {
        let (index, field) =
            self.schema
                .resolve_field(name)
                .ok_or_else(|| ShapeError::UnknownField {
                    record: self.schema.name.to_string(),
                    field: name.to_string(),
                })?;

        match value {
            Some(value) => {
                check_field(self.schema, field, &value)?;
                self.values.insert(index, value);
            }
            None => {
                self.values.remove(&index);
            }
        }
        Ok(())
    }

    /// Project to the canonical map: wire names in declaration order,
    /// absent fields omitted, deferred markers passed through.
    pub fn to_canonical(&self) -> CanonicalMap {
        self.fields()
            .map(|(field, value)| (field.wire.to_string(), Canonical::from_value(value)))
            .collect()
    }

    /// CloudFormation form of the record: PascalCase property names with
    /// deferred markers resolved to their template expressions.
    pub fn render_cfn(&self) -> JsonMap<String, JsonValue> {
        self.fields()
            .map(|(field, value)| (field.cfn_name(), render_value(value)))
            .collect()
    }
}

fn render_value(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Number(n) => n.to_json(),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Record(record) => JsonValue::Object(record.render_cfn()),
        Value::List(items) => JsonValue::Array(items.iter().map(render_value).collect()),
        Value::Deferred(deferred) => deferred.resolve(),
    }
}

/// Check one value against a field's structural contract.
pub(crate) fn check_field(
    schema: &RecordSchema,
    field: &FieldSpec,
    value: &Value,
) -> ShapeResult<()> {
    let accepted = match (&field.shape, value) {
        (_, Value::Deferred(_)) => true,
        (Shape::Scalar(scalar), value) => scalar.accepts(value),
        (Shape::Record(expected), Value::Record(record)) => record.is_kind(expected()),
        (Shape::Union(variants), Value::Record(record)) => {
            variants.iter().any(|variant| record.is_kind(variant()))
        }
        (Shape::List(element), Value::List(items)) => {
            if let Some((index, item)) = items
                .iter()
                .enumerate()
                .find(|(_, item)| !element.accepts(item))
            {
                return Err(ShapeError::WrongElement {
                    record: schema.name.to_string(),
                    field: field.name.to_string(),
                    index,
                    expected: element.describe(),
                    found: item.describe(),
                });
            }
            true
        }
        _ => false,
    };

    if accepted {
        Ok(())
    } else {
        Err(ShapeError::WrongType {
            record: schema.name.to_string(),
            field: field.name.to_string(),
            expected: field.shape.describe(),
            found: value.describe(),
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_kind(other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.name)?;
        for (position, (field, value)) in self.fields().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", field.name, value)?;
        }
        f.write_str(")")
    }
}

/// Typed facade over a [`Record`] of one fixed kind.
///
/// Implemented by every record kind generated with
/// [`define_records!`](crate::define_records).
pub trait RecordType: Clone + PartialEq + fmt::Debug + Sized {
    fn schema() -> &'static RecordSchema;

    fn as_record(&self) -> &Record;

    fn into_record(self) -> Record;

    #[doc(hidden)]
    fn from_record_unchecked(record: Record) -> Self;

    /// Wrap an untyped record, checking that it is of this kind.
    fn from_record(record: Record) -> ShapeResult<Self> {
        if record.is_kind(Self::schema()) {
            Ok(Self::from_record_unchecked(record))
        } else {
            Err(ShapeError::WrongKind {
                expected: Self::schema().name.to_string(),
                found: record.kind().to_string(),
            })
        }
    }

    /// Build from keyword-style bindings; see [`Record::from_bindings`].
    fn try_from_bindings<I, K, V>(bindings: I) -> ShapeResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<Value>>,
    {
        Record::from_bindings(Self::schema(), bindings).map(Self::from_record_unchecked)
    }

    /// Build from a wire-named JSON document; see [`Record::from_document`].
    fn from_document(document: &JsonValue) -> ShapeResult<Self> {
        Record::from_document(Self::schema(), document).map(Self::from_record_unchecked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Element, ScalarType};

    fn destination_schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Destination",
            qualified_name: "Test::Destination",
            fields: &[
                FieldSpec {
                    name: "url",
                    wire: "url",
                    shape: Shape::Scalar(ScalarType::String),
                },
                FieldSpec {
                    name: "stream_name",
                    wire: "streamName",
                    shape: Shape::Scalar(ScalarType::String),
                },
                FieldSpec {
                    name: "ports",
                    wire: "ports",
                    shape: Shape::List(Element::Scalar(ScalarType::Integer)),
                },
            ],
        };
        &SCHEMA
    }

    #[test]
    fn test_bindings_accept_both_names() {
        let record = Record::from_bindings(
            destination_schema(),
            [("url", Value::from("rtmp://a")), ("streamName", Value::from("live"))],
        )
        .unwrap();

        assert_eq!(record.get("stream_name"), Some(&Value::from("live")));
        assert_eq!(record.get("streamName"), Some(&Value::from("live")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_null_binding_is_absent() {
        let explicit_null = Record::from_bindings(
            destination_schema(),
            [("url", Some(Value::from("rtmp://a"))), ("stream_name", None)],
        )
        .unwrap();
        let omitted =
            Record::from_bindings(destination_schema(), [("url", Value::from("rtmp://a"))])
                .unwrap();

        assert_eq!(explicit_null, omitted);
        assert!(explicit_null.get("stream_name").is_none());
        assert!(!explicit_null.to_canonical().contains_key("streamName"));
    }

    #[test]
    fn test_list_element_violation_reports_index() {
        let err = Record::from_bindings(
            destination_schema(),
            [("ports", Value::List(vec![Value::from(1935), Value::from("80")]))],
        )
        .unwrap_err();

        match err {
            ShapeError::WrongElement { field, index, .. } => {
                assert_eq!(field, "ports");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_debug_lists_present_fields_in_declaration_order() {
        let record = Record::from_bindings(
            destination_schema(),
            [("stream_name", Value::from("live")), ("url", Value::from("rtmp://a"))],
        )
        .unwrap();

        assert_eq!(
            format!("{:?}", record),
            "Destination(url=\"rtmp://a\", stream_name=\"live\")"
        );
    }

    #[test]
    fn test_with_and_without() {
        let record = Record::empty(destination_schema())
            .with("url", Value::from("rtmp://a"))
            .unwrap();
        assert!(record.contains("url"));

        let cleared = record.clone().without("url").unwrap();
        assert!(cleared.is_empty());
        assert!(record.clone().with("bogus", Value::from(1)).is_err());
    }
}
