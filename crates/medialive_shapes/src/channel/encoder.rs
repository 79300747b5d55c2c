//! Encoder settings: the root of a channel's encode pipeline and the
//! channel-wide configuration blocks hanging off it.

use super::*;

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = ENCODER_SCHEMAS;

    EncoderSettings {
        audio_descriptions: [AudioDescription] => "audioDescriptions",
        avail_blanking: AvailBlanking => "availBlanking",
        avail_configuration: AvailConfiguration => "availConfiguration",
        blackout_slate: BlackoutSlate => "blackoutSlate",
        caption_descriptions: [CaptionDescription] => "captionDescriptions",
        feature_activations: FeatureActivations => "featureActivations",
        global_configuration: GlobalConfiguration => "globalConfiguration",
        motion_graphics_configuration: MotionGraphicsConfiguration => "motionGraphicsConfiguration",
        nielsen_configuration: NielsenConfiguration => "nielsenConfiguration",
        output_groups: [OutputGroup] => "outputGroups",
        timecode_config: TimecodeConfig => "timecodeConfig",
        video_descriptions: [VideoDescription] => "videoDescriptions",
    }

    /// Location of a file the channel reads (slates, fonts, keys).
    InputLocation {
        password_param: String => "passwordParam",
        uri: String => "uri",
        username: String => "username",
    }

    AvailBlanking {
        avail_blanking_image: InputLocation => "availBlankingImage",
        state: String => "state",
    }

    AvailConfiguration {
        avail_settings: AvailSettings => "availSettings",
    }

    AvailSettings {
        esam: Esam => "esam",
        scte35_splice_insert: Scte35SpliceInsert => "scte35SpliceInsert",
        scte35_time_signal_apos: Scte35TimeSignalApos => "scte35TimeSignalApos",
    }

    Esam {
        acquisition_point_id: String => "acquisitionPointId",
        ad_avail_offset: Integer => "adAvailOffset",
        password_param: String => "passwordParam",
        pois_endpoint: String => "poisEndpoint",
        username: String => "username",
        zone_identity: String => "zoneIdentity",
    }

    Scte35SpliceInsert {
        ad_avail_offset: Integer => "adAvailOffset",
        no_regional_blackout_flag: String => "noRegionalBlackoutFlag",
        web_delivery_allowed_flag: String => "webDeliveryAllowedFlag",
    }

    Scte35TimeSignalApos {
        ad_avail_offset: Integer => "adAvailOffset",
        no_regional_blackout_flag: String => "noRegionalBlackoutFlag",
        web_delivery_allowed_flag: String => "webDeliveryAllowedFlag",
    }

    BlackoutSlate {
        blackout_slate_image: InputLocation => "blackoutSlateImage",
        network_end_blackout: String => "networkEndBlackout",
        network_end_blackout_image: InputLocation => "networkEndBlackoutImage",
        network_id: String => "networkId",
        state: String => "state",
    }

    FeatureActivations {
        input_prepare_schedule_actions: String => "inputPrepareScheduleActions",
    }

    GlobalConfiguration {
        initial_audio_gain: Integer => "initialAudioGain",
        input_end_action: String => "inputEndAction",
        input_loss_behavior: InputLossBehavior => "inputLossBehavior",
        output_locking_mode: String => "outputLockingMode",
        output_timing_source: String => "outputTimingSource",
        support_low_framerate_inputs: String => "supportLowFramerateInputs",
    }

    InputLossBehavior {
        black_frame_msec: Integer => "blackFrameMsec",
        input_loss_image_color: String => "inputLossImageColor",
        input_loss_image_slate: InputLocation => "inputLossImageSlate",
        input_loss_image_type: String => "inputLossImageType",
        repeat_frame_msec: Integer => "repeatFrameMsec",
    }

    MotionGraphicsConfiguration {
        motion_graphics_insertion: String => "motionGraphicsInsertion",
        motion_graphics_settings: MotionGraphicsSettings => "motionGraphicsSettings",
    }

    MotionGraphicsSettings {
        html_motion_graphics_settings: HtmlMotionGraphicsSettings => "htmlMotionGraphicsSettings",
    }

    HtmlMotionGraphicsSettings {}

    NielsenConfiguration {
        distributor_id: String => "distributorId",
        nielsen_pcm_to_id3_tagging: String => "nielsenPcmToId3Tagging",
    }

    TimecodeConfig {
        source: String => "source",
        sync_threshold: Integer => "syncThreshold",
    }
}
