//! Deferred handles to values of a deployed resource.

use medialive_core::Resolvable;
use serde_json::{json, Value as JsonValue};

/// An attribute of a resource (`Fn::GetAtt`), known only after deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    logical_id: String,
    attribute: &'static str,
}

impl AttributeRef {
    pub fn new(logical_id: impl Into<String>, attribute: &'static str) -> Self {
        Self {
            logical_id: logical_id.into(),
            attribute,
        }
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }
}

impl Resolvable for AttributeRef {
    fn resolve(&self) -> JsonValue {
        json!({ "Fn::GetAtt": [self.logical_id, self.attribute] })
    }
}

/// The resource's own reference (`Ref`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    logical_id: String,
}

impl ResourceRef {
    pub fn new(logical_id: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
        }
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }
}

impl Resolvable for ResourceRef {
    fn resolve(&self) -> JsonValue {
        json!({ "Ref": self.logical_id })
    }
}
