//! `AWS::MediaLive::Input`.

use medialive_core::{Deferred, Record, RecordType, Value};
use medialive_shapes::input::{
    InputDestinationRequest, InputDeviceSettings, InputProps, InputSourceRequest, InputVpcRequest,
    MediaConnectFlowRequest,
};

use crate::error::ResourceResult;
use crate::resource::{property_accessors, CfnResource, ResourceCore};
use crate::scope::Scope;
use crate::tags::INITIAL_TAG_PRIORITY;

/// A MediaLive input: the push endpoints or pull sources a channel reads.
#[derive(Debug)]
pub struct CfnInput {
    core: ResourceCore,
    props: InputProps,
    attr_arn: Deferred,
    attr_destinations: Deferred,
    attr_sources: Deferred,
}

impl CfnInput {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::MediaLive::Input";

    pub fn new(scope: &dyn Scope, logical_id: &str, props: InputProps) -> ResourceResult<Self> {
        let mut core = ResourceCore::new(scope, logical_id, Self::CFN_RESOURCE_TYPE_NAME)?;
        let attr_arn = core.define_attribute("Arn");
        let attr_destinations = core.define_attribute("Destinations");
        let attr_sources = core.define_attribute("Sources");

        Ok(Self {
            core,
            props,
            attr_arn,
            attr_destinations,
            attr_sources,
        })
    }

    /// Build from keyword-style bindings of [`InputProps`].
    pub fn from_bindings<I, K, V>(scope: &dyn Scope, logical_id: &str, bindings: I) -> ResourceResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<Value>>,
    {
        let props = InputProps::try_from_bindings(bindings)?;
        Self::new(scope, logical_id, props)
    }

    /// Add the tags the resource is defined with.
    pub fn with_tags<I, K, V>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in tags {
            self.tags_mut()
                .set_tag_with_priority(key, value, INITIAL_TAG_PRIORITY);
        }
        self
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn attr_arn(&self) -> Deferred {
        self.attr_arn.clone()
    }

    /// Push endpoints assigned by the service.
    pub fn attr_destinations(&self) -> Deferred {
        self.attr_destinations.clone()
    }

    pub fn attr_sources(&self) -> Deferred {
        self.attr_sources.clone()
    }

    property_accessors! {
        destinations: Vec<InputDestinationRequest>,
        input_devices: Vec<InputDeviceSettings>,
        input_security_groups: Vec<String>,
        media_connect_flows: Vec<MediaConnectFlowRequest>,
        name: String,
        role_arn: String,
        sources: Vec<InputSourceRequest>,
        input_type: String,
        vpc: InputVpcRequest,
    }
}

impl CfnResource for CfnInput {
    fn core(&self) -> &ResourceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ResourceCore {
        &mut self.core
    }

    fn properties(&self) -> &Record {
        self.props.as_record()
    }

    fn replace_properties(&mut self, properties: Record) -> ResourceResult<()> {
        self.props = InputProps::from_record(properties)?;
        Ok(())
    }
}
