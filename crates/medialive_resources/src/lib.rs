//! # medialive_resources
//!
//! CloudFormation constructs for AWS Elemental MediaLive.
//!
//! Each construct wraps the typed root property record of its resource,
//! registers a logical id with its parent scope, owns the resource tags and
//! hands out deferred handles for the attributes the deployed resource
//! exposes.
//!
//! ## Features
//!
//! - `CfnChannel`, `CfnInput` and `CfnInputSecurityGroup`
//! - Canonical property maps for the host, plus CloudFormation rendering
//! - Tag management with priorities
//! - Stack definitions loaded from YAML or JSON
//!
//! ## Example
//!
//! ```rust
//! use medialive_resources::{CfnChannel, CfnResource, Stack};
//! use medialive_shapes::channel::ChannelProps;
//!
//! let stack = Stack::new("LiveStack");
//! let props = ChannelProps::new()
//!     .with_name("ch1")
//!     .with_channel_class("SINGLE_PIPELINE");
//!
//! let mut channel = CfnChannel::new(&stack, "Channel", props).unwrap();
//! channel.tags_mut().set_tag("team", "video");
//!
//! let fragment = channel.to_template_fragment();
//! assert_eq!(fragment["Type"], "AWS::MediaLive::Channel");
//! assert_eq!(fragment["Properties"]["ChannelClass"], "SINGLE_PIPELINE");
//! ```

pub mod attribute;
pub mod channel;
pub mod definition;
pub mod error;
pub mod input;
pub mod input_security_group;
pub mod inspector;
pub mod resource;
pub mod scope;
pub mod tags;

pub use attribute::{AttributeRef, ResourceRef};
pub use channel::CfnChannel;
pub use definition::{AnyResource, ResourceDefinition, StackDefinition};
pub use error::{ResourceError, ResourceResult, ScopeError};
pub use input::CfnInput;
pub use input_security_group::CfnInputSecurityGroup;
pub use inspector::{AttributeCollector, TreeInspector, CFN_PROPS_ATTRIBUTE, CFN_TYPE_ATTRIBUTE};
pub use resource::{CfnResource, ResourceCore};
pub use scope::{Scope, Stack};
pub use tags::{TagManager, DEFAULT_TAG_PRIORITY, INITIAL_TAG_PRIORITY};
