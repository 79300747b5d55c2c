//! Tree inspection: how a resource describes itself to the host.

use indexmap::IndexMap;
use medialive_core::Canonical;

/// Attribute carrying the CloudFormation resource type.
pub const CFN_TYPE_ATTRIBUTE: &str = "aws:cdk:cloudformation:type";

/// Attribute carrying the canonical properties.
pub const CFN_PROPS_ATTRIBUTE: &str = "aws:cdk:cloudformation:props";

/// Receiver of the attributes a resource reports during inspection.
pub trait TreeInspector {
    fn add_attribute(&mut self, key: &str, value: Canonical);
}

/// Inspector that keeps every reported attribute.
#[derive(Debug, Default)]
pub struct AttributeCollector {
    attributes: IndexMap<String, Canonical>,
}

impl AttributeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Canonical> {
        self.attributes.get(key)
    }

    /// Reported attributes in reporting order.
    pub fn attributes(&self) -> &IndexMap<String, Canonical> {
        &self.attributes
    }
}

impl TreeInspector for AttributeCollector {
    fn add_attribute(&mut self, key: &str, value: Canonical) {
        self.attributes.insert(key.to_string(), value);
    }
}
