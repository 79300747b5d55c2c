//! Behavior shared by every MediaLive resource.

use std::fmt;

use indexmap::IndexMap;
use medialive_core::{Canonical, CanonicalMap, Deferred, Record, Value};
use serde_json::{json, Map as JsonMap, Value as JsonValue};
use tracing::{debug, trace};

use crate::attribute::{AttributeRef, ResourceRef};
use crate::error::ResourceResult;
use crate::inspector::{TreeInspector, CFN_PROPS_ATTRIBUTE, CFN_TYPE_ATTRIBUTE};
use crate::scope::Scope;
use crate::tags::TagManager;

/// Identity, tags and attribute handles of a defined resource.
#[derive(Debug)]
pub struct ResourceCore {
    logical_id: String,
    node_path: String,
    resource_type: &'static str,
    tags: TagManager,
    reference: Deferred,
    attributes: IndexMap<&'static str, Deferred>,
}

impl ResourceCore {
    /// Register `logical_id` with the scope and set up the resource identity.
    pub fn new(scope: &dyn Scope, logical_id: &str, resource_type: &'static str) -> ResourceResult<Self> {
        scope.register(logical_id, resource_type)?;

        let node_path = format!("{}/{}", scope.path(), logical_id);
        debug!("Defined {} at {}", resource_type, node_path);

        Ok(Self {
            logical_id: logical_id.to_string(),
            node_path,
            resource_type,
            tags: TagManager::new(resource_type),
            reference: Deferred::new(ResourceRef::new(logical_id)),
            attributes: IndexMap::new(),
        })
    }

    /// Create the handle for a deployment-time attribute.
    pub fn define_attribute(&mut self, name: &'static str) -> Deferred {
        let handle = Deferred::new(AttributeRef::new(self.logical_id.clone(), name));
        self.attributes.insert(name, handle.clone());
        handle
    }
}

/// A CloudFormation resource backed by a root property record.
pub trait CfnResource: fmt::Debug {
    fn core(&self) -> &ResourceCore;

    fn core_mut(&mut self) -> &mut ResourceCore;

    /// Root property record.
    fn properties(&self) -> &Record;

    /// Replace the root property record. Fails when the record is not of
    /// the resource's root kind.
    fn replace_properties(&mut self, properties: Record) -> ResourceResult<()>;

    fn logical_id(&self) -> &str {
        &self.core().logical_id
    }

    /// Scope path followed by the logical id.
    fn node_path(&self) -> &str {
        &self.core().node_path
    }

    fn resource_type(&self) -> &'static str {
        self.core().resource_type
    }

    fn tags(&self) -> &TagManager {
        &self.core().tags
    }

    fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.core_mut().tags
    }

    /// `Ref` of this resource.
    fn reference(&self) -> Deferred {
        self.core().reference.clone()
    }

    /// Handle of a deployment-time attribute by CloudFormation name.
    fn attribute(&self, name: &str) -> Option<Deferred> {
        self.core().attributes.get(name).cloned()
    }

    fn attribute_names(&self) -> Vec<&'static str> {
        self.core().attributes.keys().copied().collect()
    }

    /// Rebind one top-level property by in-language or wire name.
    fn set_property(&mut self, name: &str, value: Value) -> ResourceResult<()> {
        let properties = self.properties().clone().with(name, value)?;
        self.replace_properties(properties)
    }

    /// Clear one top-level property.
    fn unset_property(&mut self, name: &str) -> ResourceResult<()> {
        let properties = self.properties().clone().without(name)?;
        self.replace_properties(properties)
    }

    /// Canonical property map handed to the host: the projected root record
    /// plus the rendered tags under `tags`.
    fn cfn_properties(&self) -> CanonicalMap {
        let mut properties = self.properties().to_canonical();
        if let Some(tags) = self.tags().render() {
            properties.insert("tags".to_string(), Canonical::Map(tags));
        }
        trace!("Projected {} properties of {}", properties.len(), self.logical_id());
        properties
    }

    /// CloudFormation form of the properties, with deferred values resolved.
    fn render_properties(&self) -> JsonMap<String, JsonValue> {
        let mut rendered = self.properties().render_cfn();
        if let Some(tags) = self.tags().render_json() {
            rendered.insert("Tags".to_string(), tags);
        }
        rendered
    }

    /// `{"Type": ..., "Properties": ...}` entry of this resource.
    fn to_template_fragment(&self) -> JsonValue {
        let properties = self.render_properties();
        if properties.is_empty() {
            json!({ "Type": self.resource_type() })
        } else {
            json!({ "Type": self.resource_type(), "Properties": properties })
        }
    }

    /// Report the resource type and its canonical properties.
    fn inspect(&self, inspector: &mut dyn TreeInspector) {
        inspector.add_attribute(
            CFN_TYPE_ATTRIBUTE,
            Canonical::String(self.resource_type().to_string()),
        );
        inspector.add_attribute(CFN_PROPS_ATTRIBUTE, Canonical::Map(self.cfn_properties()));
    }
}

/// Typed accessor and `set_<field>` mutator per top-level property of a
/// resource whose root record lives in `self.props`.
macro_rules! property_accessors {
    ($( $field:ident : $arg:ty ),* $(,)?) => {
        paste::paste! {
            $(
                pub fn $field(&self) -> Option<&medialive_core::Value> {
                    self.props.$field()
                }

                pub fn [<set_ $field>](
                    &mut self,
                    value: impl Into<medialive_core::OrDeferred<$arg>>,
                ) {
                    let props = std::mem::take(&mut self.props);
                    self.props = props.[<with_ $field>](value);
                }
            )*
        }
    };
}

pub(crate) use property_accessors;
