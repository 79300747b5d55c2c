//! Property records of `AWS::MediaLive::Input`.

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Input";
    index = INPUT_SCHEMAS;

    /// Top-level properties of an input. Tags are held by the resource.
    ///
    /// The `Type` property is exposed as `input_type`.
    InputProps {
        destinations: [InputDestinationRequest] => "destinations",
        input_devices: [InputDeviceSettings] => "inputDevices",
        input_security_groups: [String] => "inputSecurityGroups",
        media_connect_flows: [MediaConnectFlowRequest] => "mediaConnectFlows",
        name: String => "name",
        role_arn: String => "roleArn",
        sources: [InputSourceRequest] => "sources",
        input_type: String => "type",
        vpc: InputVpcRequest => "vpc",
    }

    /// A push endpoint of the input.
    InputDestinationRequest {
        stream_name: String => "streamName",
    }

    InputDeviceRequest {
        id: String => "id",
    }

    InputDeviceSettings {
        id: String => "id",
    }

    /// A pull source of the input.
    InputSourceRequest {
        password_param: String => "passwordParam",
        url: String => "url",
        username: String => "username",
    }

    InputVpcRequest {
        security_group_ids: [String] => "securityGroupIds",
        subnet_ids: [String] => "subnetIds",
    }

    MediaConnectFlowRequest {
        flow_arn: String => "flowArn",
    }
}
