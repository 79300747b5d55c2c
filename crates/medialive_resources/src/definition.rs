//! Declarative resource definitions loaded from YAML or JSON.
//!
//! ```yaml
//! name: LiveStack
//! resources:
//!   Channel:
//!     type: AWS::MediaLive::Channel
//!     properties:
//!       name: ch1
//!       channelClass: SINGLE_PIPELINE
//!     tags:
//!       team: video
//! ```
//!
//! Properties use the wire (camelCase) names. Intrinsic objects such as
//! `{"Ref": "RoleArn"}` are kept as deferred values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use medialive_core::RecordType;
use medialive_shapes::channel::ChannelProps;
use medialive_shapes::input::InputProps;
use medialive_shapes::input_security_group::InputSecurityGroupProps;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::channel::CfnChannel;
use crate::error::{ResourceError, ResourceResult};
use crate::input::CfnInput;
use crate::input_security_group::CfnInputSecurityGroup;
use crate::resource::CfnResource;
use crate::scope::{Scope, Stack};

/// A set of resources to define in one stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackDefinition {
    pub name: String,

    /// Resources by logical id, in document order.
    #[serde(default)]
    pub resources: IndexMap<String, ResourceDefinition>,
}

/// One resource entry of a [`StackDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    #[serde(rename = "type")]
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub properties: JsonValue,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// A resource of any of the MediaLive types.
#[derive(Debug)]
pub enum AnyResource {
    Channel(CfnChannel),
    Input(CfnInput),
    InputSecurityGroup(CfnInputSecurityGroup),
}

impl AnyResource {
    pub fn as_resource(&self) -> &dyn CfnResource {
        match self {
            AnyResource::Channel(resource) => resource,
            AnyResource::Input(resource) => resource,
            AnyResource::InputSecurityGroup(resource) => resource,
        }
    }

    pub fn as_resource_mut(&mut self) -> &mut dyn CfnResource {
        match self {
            AnyResource::Channel(resource) => resource,
            AnyResource::Input(resource) => resource,
            AnyResource::InputSecurityGroup(resource) => resource,
        }
    }

    pub fn as_channel(&self) -> Option<&CfnChannel> {
        match self {
            AnyResource::Channel(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&CfnInput> {
        match self {
            AnyResource::Input(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_input_security_group(&self) -> Option<&CfnInputSecurityGroup> {
        match self {
            AnyResource::InputSecurityGroup(resource) => Some(resource),
            _ => None,
        }
    }
}

impl ResourceDefinition {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties: JsonValue::Null,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_properties(mut self, properties: JsonValue) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Define the resource in `scope` under `logical_id`.
    pub fn instantiate(&self, scope: &dyn Scope, logical_id: &str) -> ResourceResult<AnyResource> {
        let empty = JsonValue::Object(Default::default());
        let properties = if self.properties.is_null() {
            &empty
        } else {
            &self.properties
        };

        let resource = match self.resource_type.as_str() {
            CfnChannel::CFN_RESOURCE_TYPE_NAME => {
                let props = ChannelProps::from_document(properties)?;
                AnyResource::Channel(CfnChannel::new(scope, logical_id, props)?.with_tags(&self.tags))
            }
            CfnInput::CFN_RESOURCE_TYPE_NAME => {
                let props = InputProps::from_document(properties)?;
                AnyResource::Input(CfnInput::new(scope, logical_id, props)?.with_tags(&self.tags))
            }
            CfnInputSecurityGroup::CFN_RESOURCE_TYPE_NAME => {
                let props = InputSecurityGroupProps::from_document(properties)?;
                AnyResource::InputSecurityGroup(
                    CfnInputSecurityGroup::new(scope, logical_id, props)?.with_tags(&self.tags),
                )
            }
            other => return Err(ResourceError::UnknownResourceType(other.to_string())),
        };

        debug!("Instantiated {} '{}'", self.resource_type, logical_id);
        Ok(resource)
    }
}

impl StackDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: IndexMap::new(),
        }
    }

    pub fn with_resource(mut self, logical_id: impl Into<String>, resource: ResourceDefinition) -> Self {
        self.resources.insert(logical_id.into(), resource);
        self
    }

    /// Load a definition; `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: &Path) -> ResourceResult<Self> {
        let content = fs::read_to_string(path)?;
        let definition = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        info!(
            "Loaded stack definition '{}' with {} resource(s) from {}",
            definition.name,
            definition.resources.len(),
            path.display()
        );
        Ok(definition)
    }

    pub fn from_yaml_str(content: &str) -> ResourceResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ResourceResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save the definition as YAML.
    pub fn to_file(&self, path: &Path) -> ResourceResult<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Define every resource in `scope`, in document order.
    pub fn instantiate(&self, scope: &dyn Scope) -> ResourceResult<Vec<AnyResource>> {
        self.resources
            .iter()
            .map(|(logical_id, resource)| resource.instantiate(scope, logical_id))
            .collect()
    }

    /// Define every resource in a new [`Stack`] named after the definition.
    pub fn build(&self) -> ResourceResult<(Stack, Vec<AnyResource>)> {
        let stack = Stack::new(self.name.clone());
        let resources = self.instantiate(&stack)?;
        info!("Built stack '{}' with {} resource(s)", self.name, resources.len());
        Ok((stack, resources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_resource_type() {
        let stack = Stack::new("LiveStack");
        let err = ResourceDefinition::new("AWS::MediaLive::Multiplex")
            .instantiate(&stack, "Mux")
            .unwrap_err();

        assert!(matches!(err, ResourceError::UnknownResourceType(t) if t == "AWS::MediaLive::Multiplex"));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_missing_properties_define_empty_resource() {
        let stack = Stack::new("LiveStack");
        let resource = ResourceDefinition::new("AWS::MediaLive::InputSecurityGroup")
            .with_tag("team", "video")
            .instantiate(&stack, "Allow")
            .unwrap();

        let group = resource.as_input_security_group().unwrap();
        assert!(group.props().as_record().is_empty());
        assert_eq!(group.tags().get("team"), Some("video"));
    }

    #[test]
    fn test_invalid_properties_do_not_register() {
        let stack = Stack::new("LiveStack");
        let err = ResourceDefinition::new("AWS::MediaLive::Channel")
            .with_properties(json!({ "channelClass": 1 }))
            .instantiate(&stack, "Channel")
            .unwrap_err();

        assert!(matches!(err, ResourceError::Shape(_)));
        assert!(stack.is_empty());
    }
}
