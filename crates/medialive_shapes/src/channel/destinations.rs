//! Output destinations, VPC placement and the input specification of a
//! channel.

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = DESTINATION_SCHEMAS;

    /// A named destination referenced by output groups through
    /// `destinationRefId`.
    OutputDestination {
        id: String => "id",
        media_package_settings: [MediaPackageOutputDestinationSettings] => "mediaPackageSettings",
        multiplex_settings: MultiplexProgramChannelDestinationSettings => "multiplexSettings",
        settings: [OutputDestinationSettings] => "settings",
    }

    /// One endpoint per pipeline.
    OutputDestinationSettings {
        password_param: String => "passwordParam",
        stream_name: String => "streamName",
        url: String => "url",
        username: String => "username",
    }

    MediaPackageOutputDestinationSettings {
        channel_id: String => "channelId",
    }

    MultiplexProgramChannelDestinationSettings {
        multiplex_id: String => "multiplexId",
        program_name: String => "programName",
    }

    VpcOutputSettings {
        public_address_allocation_ids: [String] => "publicAddressAllocationIds",
        security_group_ids: [String] => "securityGroupIds",
        subnet_ids: [String] => "subnetIds",
    }

    CdiInputSpecification {
        resolution: String => "resolution",
    }

    InputSpecification {
        codec: String => "codec",
        maximum_bitrate: String => "maximumBitrate",
        resolution: String => "resolution",
    }
}
