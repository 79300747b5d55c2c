//! `AWS::MediaLive::Channel`.

use medialive_core::{Deferred, Record, RecordType, Value};
use medialive_shapes::channel::{
    CdiInputSpecification, ChannelProps, EncoderSettings, InputAttachment, InputSpecification,
    OutputDestination, VpcOutputSettings,
};

use crate::error::ResourceResult;
use crate::resource::{property_accessors, CfnResource, ResourceCore};
use crate::scope::Scope;
use crate::tags::INITIAL_TAG_PRIORITY;

/// A MediaLive channel: encodes attached inputs into output groups.
#[derive(Debug)]
pub struct CfnChannel {
    core: ResourceCore,
    props: ChannelProps,
    attr_arn: Deferred,
    attr_inputs: Deferred,
}

impl CfnChannel {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::MediaLive::Channel";

    pub fn new(scope: &dyn Scope, logical_id: &str, props: ChannelProps) -> ResourceResult<Self> {
        let mut core = ResourceCore::new(scope, logical_id, Self::CFN_RESOURCE_TYPE_NAME)?;
        let attr_arn = core.define_attribute("Arn");
        let attr_inputs = core.define_attribute("Inputs");

        Ok(Self {
            core,
            props,
            attr_arn,
            attr_inputs,
        })
    }

    /// Build from keyword-style bindings of [`ChannelProps`].
    pub fn from_bindings<I, K, V>(scope: &dyn Scope, logical_id: &str, bindings: I) -> ResourceResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<Value>>,
    {
        let props = ChannelProps::try_from_bindings(bindings)?;
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

    pub fn props(&self) -> &ChannelProps {
        &self.props
    }

    /// ARN of the channel.
    pub fn attr_arn(&self) -> Deferred {
        self.attr_arn.clone()
    }

    /// Ids of the inputs attached to the channel.
    pub fn attr_inputs(&self) -> Deferred {
        self.attr_inputs.clone()
    }

    property_accessors! {
        cdi_input_specification: CdiInputSpecification,
        channel_class: String,
        destinations: Vec<OutputDestination>,
        encoder_settings: EncoderSettings,
        input_attachments: Vec<InputAttachment>,
        input_specification: InputSpecification,
        log_level: String,
        name: String,
        role_arn: String,
        vpc: VpcOutputSettings,
    }
}

impl CfnResource for CfnChannel {
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
        self.props = ChannelProps::from_record(properties)?;
        Ok(())
    }
}
