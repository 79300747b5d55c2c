//! Property records of `AWS::MediaLive::InputSecurityGroup`.

medialive_core::define_records! {
    namespace = "AWS::MediaLive::InputSecurityGroup";
    index = INPUT_SECURITY_GROUP_SCHEMAS;

    /// Top-level properties of an input security group. Tags are held by
    /// the resource.
    InputSecurityGroupProps {
        whitelist_rules: [InputWhitelistRuleCidr] => "whitelistRules",
    }

    /// An IPv4 CIDR allowed to push to inputs in the group.
    InputWhitelistRuleCidr {
        cidr: String => "cidr",
    }
}
