//! Field values carried by records.

use std::fmt;

use crate::deferred::Deferred;
use crate::record::Record;

/// A numeric field value.
///
/// Integers and floats are kept apart so a value projects exactly as the
/// caller supplied it: `128000` stays `128000`, never `128000.0`.
/// Equality is numeric: `Integer(96000) == Float(96000.0)`, and NaN equals NaN.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Number::Integer(i), Number::Float(f)) | (Number::Float(f), Number::Integer(i)) => {
                f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 && *f as i64 == *i
            }
        }
    }
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            Number::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    /// JSON form. Non-finite floats become `null`, as in `serde_json`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Number::Integer(n) => serde_json::Value::from(*n),
            Number::Float(n) => serde_json::Value::from(*n),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{:?}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $as:ty; $($from:ty),*) => {
        $(
            impl From<$from> for Number {
                fn from(value: $from) -> Self {
                    Number::$variant(value as $as)
                }
            }
        )*
    };
}

number_from!(Integer, i64; i64, i32, i16, i8, u32, u16, u8);
number_from!(Float, f64; f64, f32);

/// A field value: scalar, nested record, list, or deferred marker.
#[derive(Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Boolean(bool),
    Record(Record),
    List(Vec<Value>),
    Deferred(Deferred),
}

impl Value {
    /// Short description of the value's kind, used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Value::String(_) => "string".to_string(),
            Value::Number(Number::Integer(_)) => "integer".to_string(),
            Value::Number(Number::Float(_)) => "double".to_string(),
            Value::Boolean(_) => "boolean".to_string(),
            Value::Record(record) => format!("{} record", record.kind()),
            Value::List(_) => "list".to_string(),
            Value::Deferred(_) => "deferred value".to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_deferred(&self) -> Option<&Deferred> {
        match self {
            Value::Deferred(deferred) => Some(deferred),
            _ => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Value::Deferred(_))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Record(record) => fmt::Debug::fmt(record, f),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Deferred(deferred) => fmt::Debug::fmt(deferred, f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_number {
    ($($from:ty),*) => {
        $(
            impl From<$from> for Value {
                fn from(value: $from) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i64, i32, i16, i8, u32, u16, u8, f64, f32);

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Deferred> for Value {
    fn from(value: Deferred) -> Self {
        Value::Deferred(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

/// Argument type of the typed builders: either the declared value or a
/// deferred marker standing in for the whole field.
#[derive(Debug, Clone, PartialEq)]
pub enum OrDeferred<T> {
    Value(T),
    Deferred(Deferred),
}

impl<T> From<Deferred> for OrDeferred<T> {
    fn from(value: Deferred) -> Self {
        OrDeferred::Deferred(value)
    }
}

impl From<Record> for OrDeferred<Record> {
    fn from(value: Record) -> Self {
        OrDeferred::Value(value)
    }
}

impl From<String> for OrDeferred<String> {
    fn from(value: String) -> Self {
        OrDeferred::Value(value)
    }
}

impl From<&str> for OrDeferred<String> {
    fn from(value: &str) -> Self {
        OrDeferred::Value(value.to_string())
    }
}

impl From<&String> for OrDeferred<String> {
    fn from(value: &String) -> Self {
        OrDeferred::Value(value.clone())
    }
}

impl From<bool> for OrDeferred<bool> {
    fn from(value: bool) -> Self {
        OrDeferred::Value(value)
    }
}

macro_rules! or_deferred_from {
    ($target:ty; $($from:ty),*) => {
        $(
            impl From<$from> for OrDeferred<$target> {
                fn from(value: $from) -> Self {
                    OrDeferred::Value(<$target>::from(value))
                }
            }
        )*
    };
}

or_deferred_from!(i64; i64, i32, i16, i8, u32, u16, u8);
or_deferred_from!(Number; Number, i64, i32, i16, i8, u32, u16, u8, f64, f32);

impl<T> From<Vec<T>> for OrDeferred<Vec<T>> {
    fn from(value: Vec<T>) -> Self {
        OrDeferred::Value(value)
    }
}

impl From<Vec<&str>> for OrDeferred<Vec<String>> {
    fn from(value: Vec<&str>) -> Self {
        OrDeferred::Value(value.into_iter().map(str::to_string).collect())
    }
}

/// Conversion of typed builder arguments into stored values.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Number(Number::Integer(self))
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl IntoValue for Record {
    fn into_value(self) -> Value {
        Value::Record(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for OrDeferred<T> {
    fn into_value(self) -> Value {
        match self {
            OrDeferred::Value(value) => value.into_value(),
            OrDeferred::Deferred(deferred) => Value::Deferred(deferred),
        }
    }
}
