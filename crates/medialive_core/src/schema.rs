//! Static record schemas: the per-kind field tables.
//!
//! A [`RecordSchema`] is the single source of truth for the wire-facing shape
//! of a record kind. It maps every in-language field name to the wire name
//! the cloud API uses and records the structural contract of the field.
//! Schemas are `static` items generated by [`define_records!`](crate::define_records).

use std::fmt;

use crate::value::{Number, Value};

/// Lazily resolved reference to another record kind's schema.
///
/// Schemas refer to each other through function pointers so that mutually
/// recursive kinds can live in separate `static` items.
pub type SchemaRef = fn() -> &'static RecordSchema;

/// Scalar field types of the CloudFormation resource specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Integer,
    Double,
    Boolean,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Integer => "integer",
            ScalarType::Double => "double",
            ScalarType::Boolean => "boolean",
        }
    }

    /// Whether a concrete (non-deferred) value satisfies this scalar type.
    /// Doubles accept integers as well.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ScalarType::String, Value::String(_))
                | (ScalarType::Integer, Value::Number(Number::Integer(_)))
                | (ScalarType::Double, Value::Number(_))
                | (ScalarType::Boolean, Value::Boolean(_))
        )
    }
}

/// Element contract of a list field.
#[derive(Clone, Copy)]
pub enum Element {
    Scalar(ScalarType),
    Record(SchemaRef),
}

impl Element {
    pub fn describe(&self) -> String {
        match self {
            Element::Scalar(scalar) => scalar.as_str().to_string(),
            Element::Record(schema) => schema().name.to_string(),
        }
    }

    /// Whether a list element satisfies the contract. A deferred marker
    /// may stand in for any element.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Deferred(_)) => true,
            (Element::Scalar(scalar), value) => scalar.accepts(value),
            (Element::Record(schema), Value::Record(record)) => {
                record.schema().same_kind(schema())
            }
            _ => false,
        }
    }
}

/// Structural contract of a field.
#[derive(Clone, Copy)]
pub enum Shape {
    Scalar(ScalarType),
    Record(SchemaRef),
    /// Any one of several record kinds.
    Union(&'static [SchemaRef]),
    List(Element),
}

impl Shape {
    pub fn describe(&self) -> String {
        match self {
            Shape::Scalar(scalar) => scalar.as_str().to_string(),
            Shape::Record(schema) => schema().name.to_string(),
            Shape::Union(variants) => variants
                .iter()
                .map(|schema| schema().name)
                .collect::<Vec<_>>()
                .join(" | "),
            Shape::List(element) => format!("list of {}", element.describe()),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// One entry of a record's name table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// In-language (snake_case) name.
    pub name: &'static str,
    /// Wire (camelCase) name used in the canonical map.
    pub wire: &'static str,
    pub shape: Shape,
}

impl FieldSpec {
    /// Property name in the CloudFormation template (PascalCase).
    pub fn cfn_name(&self) -> String {
        pascal_case(self.wire)
    }
}

/// Field table of one record kind.
#[derive(Debug)]
pub struct RecordSchema {
    /// Kind name, e.g. `AacSettings`.
    pub name: &'static str,
    /// Fully qualified kind name, e.g. `AWS::MediaLive::Channel.AacSettings`.
    pub qualified_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Look up a field by in-language name.
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldSpec)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Look up a field by wire name.
    pub fn field_by_wire(&self, wire: &str) -> Option<(usize, &'static FieldSpec)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.wire == wire)
    }

    /// Look up a field by in-language name, falling back to the wire name.
    pub fn resolve_field(&self, name: &str) -> Option<(usize, &'static FieldSpec)> {
        self.field(name).or_else(|| self.field_by_wire(name))
    }

    pub fn same_kind(&self, other: &RecordSchema) -> bool {
        std::ptr::eq(self, other) || self.qualified_name == other.qualified_name
    }

    /// In-language name to wire name pairs, in declaration order.
    pub fn name_table(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.fields.iter().map(|field| (field.name, field.wire))
    }
}

/// Upper-case the first character of a wire name.
pub fn pascal_case(wire: &str) -> String {
    let mut chars = wire.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("channelClass"), "ChannelClass");
        assert_eq!(pascal_case("iFrameOnlyPlaylists"), "IFrameOnlyPlaylists");
        assert_eq!(pascal_case("convert608To708"), "Convert608To708");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_scalar_acceptance() {
        assert!(ScalarType::Double.accepts(&Value::from(96000)));
        assert!(ScalarType::Double.accepts(&Value::from(0.5)));
        assert!(ScalarType::Integer.accepts(&Value::from(3)));
        assert!(!ScalarType::Integer.accepts(&Value::from(0.5)));
        assert!(!ScalarType::String.accepts(&Value::from(true)));
    }
}
