//! `AWS::MediaLive::InputSecurityGroup`.

use medialive_core::{Deferred, Record, RecordType, Value};
use medialive_shapes::input_security_group::{InputSecurityGroupProps, InputWhitelistRuleCidr};

use crate::error::ResourceResult;
use crate::resource::{property_accessors, CfnResource, ResourceCore};
use crate::scope::Scope;
use crate::tags::INITIAL_TAG_PRIORITY;

/// Allow-list of networks that may push to MediaLive inputs.
#[derive(Debug)]
pub struct CfnInputSecurityGroup {
    core: ResourceCore,
    props: InputSecurityGroupProps,
    attr_arn: Deferred,
}

impl CfnInputSecurityGroup {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::MediaLive::InputSecurityGroup";

    pub fn new(
        scope: &dyn Scope,
        logical_id: &str,
        props: InputSecurityGroupProps,
    ) -> ResourceResult<Self> {
        let mut core = ResourceCore::new(scope, logical_id, Self::CFN_RESOURCE_TYPE_NAME)?;
        let attr_arn = core.define_attribute("Arn");

        Ok(Self {
            core,
            props,
            attr_arn,
        })
    }

    pub fn from_bindings<I, K, V>(scope: &dyn Scope, logical_id: &str, bindings: I) -> ResourceResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<Value>>,
    {
        let props = InputSecurityGroupProps::try_from_bindings(bindings)?;
        Self::new(scope, logical_id, props)
    }

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

    pub fn props(&self) -> &InputSecurityGroupProps {
        &self.props
    }

    pub fn attr_arn(&self) -> Deferred {
        self.attr_arn.clone()
    }

    property_accessors! {
        whitelist_rules: Vec<InputWhitelistRuleCidr>,
    }
}

impl CfnResource for CfnInputSecurityGroup {
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
        self.props = InputSecurityGroupProps::from_record(properties)?;
        Ok(())
    }
}
