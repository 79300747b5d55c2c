//! Deferred values: placeholders resolved by the host at synthesis time.

use std::fmt;
use std::sync::Arc;

use serde_json::{json, Value as JsonValue};

/// A value that is only known once the host framework synthesizes the
/// template (an attribute of another resource, a parameter, ...).
///
/// Records never call into a resolvable; they store it and hand it back.
/// Only template rendering asks for the expression.
pub trait Resolvable: fmt::Debug + Send + Sync {
    /// Template expression this value stands for.
    fn resolve(&self) -> JsonValue;
}

/// Shared handle to a [`Resolvable`].
///
/// Cloning shares the marker. Two handles are equal only when they point at
/// the same marker; the contents are never compared.
#[derive(Clone)]
pub struct Deferred(Arc<dyn Resolvable>);

impl Deferred {
    pub fn new(value: impl Resolvable + 'static) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc(value: Arc<dyn Resolvable>) -> Self {
        Self(value)
    }

    /// The shared marker behind this handle.
    pub fn as_arc(&self) -> &Arc<dyn Resolvable> {
        &self.0
    }

    /// Identity comparison of two markers.
    pub fn ptr_eq(a: &Deferred, b: &Deferred) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&a.0) as *const (),
            Arc::as_ptr(&b.0) as *const (),
        )
    }

    /// Expression produced by the underlying marker.
    pub fn resolve(&self) -> JsonValue {
        self.0.resolve()
    }
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        Deferred::ptr_eq(self, other)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({:?})", self.0)
    }
}

impl<T: Resolvable + 'static> From<Arc<T>> for Deferred {
    fn from(value: Arc<T>) -> Self {
        Self(value)
    }
}

/// A pre-rendered CloudFormation intrinsic (`Ref`, `Fn::GetAtt`, `Fn::Sub`...).
#[derive(Debug, Clone, PartialEq)]
pub struct Intrinsic(JsonValue);

impl Intrinsic {
    pub fn new(expression: JsonValue) -> Self {
        Self(expression)
    }

    /// `{"Ref": logical_id}`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self(json!({ "Ref": logical_id.into() }))
    }

    /// `{"Fn::GetAtt": [logical_id, attribute]}`
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self(json!({ "Fn::GetAtt": [logical_id.into(), attribute.into()] }))
    }

    pub fn expression(&self) -> &JsonValue {
        &self.0
    }

    /// Whether a document value is an intrinsic function call: an object
    /// with a single `Ref` or `Fn::*` key.
    pub fn is_intrinsic(value: &JsonValue) -> bool {
        match value.as_object() {
            Some(map) if map.len() == 1 => map
                .keys()
                .all(|key| key == "Ref" || key.starts_with("Fn::")),
            _ => false,
        }
    }
}

impl Resolvable for Intrinsic {
    fn resolve(&self) -> JsonValue {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deferred_equality_is_identity() {
        let a = Deferred::new(Intrinsic::reference("Bucket"));
        let b = Deferred::new(Intrinsic::reference("Bucket"));

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_intrinsic_detection() {
        assert!(Intrinsic::is_intrinsic(&json!({ "Ref": "Role" })));
        assert!(Intrinsic::is_intrinsic(&json!({ "Fn::GetAtt": ["Role", "Arn"] })));
        assert!(!Intrinsic::is_intrinsic(&json!({ "Ref": "Role", "Other": 1 })));
        assert!(!Intrinsic::is_intrinsic(&json!({ "url": "rtmp://x" })));
        assert!(!Intrinsic::is_intrinsic(&json!("Ref")));
    }

    #[test]
    fn test_get_att_resolves_to_expression() {
        let deferred = Deferred::new(Intrinsic::get_att("Channel", "Arn"));
        assert_eq!(
            deferred.resolve(),
            json!({ "Fn::GetAtt": ["Channel", "Arn"] })
        );
    }
}
