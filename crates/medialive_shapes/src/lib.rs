//! # medialive_shapes
//!
//! Property records of the AWS Elemental MediaLive CloudFormation resources.
//!
//! Every record kind of `AWS::MediaLive::Channel`, `AWS::MediaLive::Input`
//! and `AWS::MediaLive::InputSecurityGroup` is declared here from its field
//! table, together with the three root property records the resources wrap.
//! Field names follow the CloudFormation property names: the in-language
//! name is the snake_case form of the wire name, except `InputProps::input_type`
//! which carries the `type` property.
//!
//! ## Example
//!
//! ```rust
//! use medialive_shapes::channel::{AacSettings, AudioCodecSettings, AudioDescription};
//!
//! let description = AudioDescription::new()
//!     .with_name("eng")
//!     .with_codec_settings(AudioCodecSettings::new().with_aac_settings(
//!         AacSettings::new().with_bitrate(128000).with_coding_mode("CODING_MODE_2_0"),
//!     ));
//!
//! assert!(description.to_canonical().contains_key("codecSettings"));
//! ```

pub mod channel;
pub mod input;
pub mod input_security_group;

pub use medialive_core::{
    Canonical, CanonicalMap, Deferred, Intrinsic, Number, OrDeferred, Record, RecordSchema,
    RecordType, SchemaRef, ShapeError, ShapeResult, Value,
};

/// Every record kind of the three MediaLive resources.
pub fn all_schemas() -> impl Iterator<Item = &'static RecordSchema> {
    channel::schemas()
        .chain(input::INPUT_SCHEMAS.iter().copied())
        .chain(input_security_group::INPUT_SECURITY_GROUP_SCHEMAS.iter().copied())
        .map(|schema| schema())
}

/// Look up a record kind by its qualified name, e.g.
/// `AWS::MediaLive::Channel.AacSettings`.
pub fn find_schema(qualified_name: &str) -> Option<&'static RecordSchema> {
    all_schemas().find(|schema| schema.qualified_name == qualified_name)
}
