//! Building records from wire-named JSON documents.
//!
//! Documents use the canonical (camelCase) field names, so a projected map
//! rendered to JSON reads back into an equal record. `null` leaves a field
//! absent and intrinsic function objects become deferred markers.

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::deferred::{Deferred, Intrinsic};
use crate::error::{ShapeError, ShapeResult};
use crate::record::{check_field, Record};
use crate::schema::{Element, FieldSpec, RecordSchema, ScalarType, Shape};
use crate::value::{Number, Value};

impl Record {
    /// Build a record from a JSON object keyed by wire names.
    pub fn from_document(schema: &'static RecordSchema, document: &JsonValue) -> ShapeResult<Self> {
        let object = document
            .as_object()
            .ok_or_else(|| ShapeError::InvalidDocument {
                record: schema.name.to_string(),
                message: format!("expected an object, found {}", json_kind(document)),
            })?;

        let mut record = Record::empty(schema);
        for (key, raw) in object {
            let (_, field) = schema
                .field_by_wire(key)
                .ok_or_else(|| ShapeError::UnknownField {
                    record: schema.name.to_string(),
                    field: key.clone(),
                })?;

            if raw.is_null() {
                continue;
            }

            let value = convert_field(schema, field, raw)?;
            check_field(schema, field, &value)?;
            record = record.with_unchecked(field.name, value);
        }

        trace!("Read {} from document", schema.name);
        Ok(record)
    }

    /// Parse a JSON string and build a record from it.
    pub fn from_json_str(schema: &'static RecordSchema, json: &str) -> ShapeResult<Self> {
        let document: JsonValue = serde_json::from_str(json)?;
        Self::from_document(schema, &document)
    }
}

fn convert_field(schema: &RecordSchema, field: &FieldSpec, raw: &JsonValue) -> ShapeResult<Value> {
    if Intrinsic::is_intrinsic(raw) {
        return Ok(Value::Deferred(Deferred::new(Intrinsic::new(raw.clone()))));
    }

    let mismatch = || ShapeError::WrongType {
        record: schema.name.to_string(),
        field: field.name.to_string(),
        expected: field.shape.describe(),
        found: json_kind(raw).to_string(),
    };

    match &field.shape {
        Shape::Scalar(scalar) => convert_scalar(*scalar, raw).ok_or_else(mismatch),
        Shape::Record(nested) => {
            if !raw.is_object() {
                return Err(mismatch());
            }
            Record::from_document(nested(), raw).map(Value::Record)
        }
        Shape::Union(variants) => {
            if !raw.is_object() {
                return Err(mismatch());
            }
            variants
                .iter()
                .find_map(|variant| Record::from_document(variant(), raw).ok())
                .map(Value::Record)
                .ok_or_else(mismatch)
        }
        Shape::List(element) => {
            let items = raw.as_array().ok_or_else(mismatch)?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| convert_element(schema, field, element, index, item))
                .collect::<ShapeResult<Vec<_>>>()
                .map(Value::List)
        }
    }
}

fn convert_element(
    schema: &RecordSchema,
    field: &FieldSpec,
    element: &Element,
    index: usize,
    raw: &JsonValue,
) -> ShapeResult<Value> {
    if Intrinsic::is_intrinsic(raw) {
        return Ok(Value::Deferred(Deferred::new(Intrinsic::new(raw.clone()))));
    }

    let converted = match element {
        Element::Scalar(scalar) => convert_scalar(*scalar, raw),
        Element::Record(nested) if raw.is_object() => {
            return Record::from_document(nested(), raw).map(Value::Record);
        }
        Element::Record(_) => None,
    };

    converted.ok_or_else(|| ShapeError::WrongElement {
        record: schema.name.to_string(),
        field: field.name.to_string(),
        index,
        expected: element.describe(),
        found: json_kind(raw).to_string(),
    })
}

fn convert_scalar(scalar: ScalarType, raw: &JsonValue) -> Option<Value> {
    match scalar {
        ScalarType::String => raw.as_str().map(Value::from),
        ScalarType::Integer => raw.as_i64().map(Value::from),
        ScalarType::Double => raw.as_i64().map(|n| Value::Number(Number::Integer(n))).or_else(|| {
            raw.as_f64().map(|n| Value::Number(Number::Float(n)))
        }),
        ScalarType::Boolean => raw.as_bool().map(Value::from),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "double",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "object",
    }
}
