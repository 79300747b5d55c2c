//! Property records of `AWS::MediaLive::Channel`.
//!
//! The records are split by the part of the channel they configure. All of
//! them are re-exported here, so `channel::AacSettings` and
//! `channel::audio::AacSettings` name the same kind.

pub mod audio;
pub mod captions;
pub mod destinations;
pub mod encoder;
pub mod inputs;
pub mod output_groups;
pub mod video;

pub use audio::*;
pub use captions::*;
pub use destinations::*;
pub use encoder::*;
pub use inputs::*;
pub use output_groups::*;
pub use video::*;

use medialive_core::SchemaRef;

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = CHANNEL_ROOT_SCHEMAS;

    /// Top-level properties of a channel. Tags are held by the resource.
    ChannelProps {
        cdi_input_specification: CdiInputSpecification => "cdiInputSpecification",
        channel_class: String => "channelClass",
        destinations: [OutputDestination] => "destinations",
        encoder_settings: EncoderSettings => "encoderSettings",
        input_attachments: [InputAttachment] => "inputAttachments",
        input_specification: InputSpecification => "inputSpecification",
        log_level: String => "logLevel",
        name: String => "name",
        role_arn: String => "roleArn",
        vpc: VpcOutputSettings => "vpc",
    }
}

/// Every channel record kind, grouped by module.
pub fn schemas() -> impl Iterator<Item = SchemaRef> {
    [
        CHANNEL_ROOT_SCHEMAS,
        AUDIO_SCHEMAS,
        CAPTION_SCHEMAS,
        DESTINATION_SCHEMAS,
        ENCODER_SCHEMAS,
        INPUT_ATTACHMENT_SCHEMAS,
        OUTPUT_GROUP_SCHEMAS,
        VIDEO_SCHEMAS,
    ]
    .into_iter()
    .flatten()
    .copied()
}
