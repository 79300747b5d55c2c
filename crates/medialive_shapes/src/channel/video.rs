//! Video encodes: descriptions and the H.264, H.265, MPEG-2 and frame
//! capture codec settings.

use super::*;

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = VIDEO_SCHEMAS;

    /// One video encode, referenced by name from outputs.
    VideoDescription {
        codec_settings: VideoCodecSettings => "codecSettings",
        height: Integer => "height",
        name: String => "name",
        respond_to_afd: String => "respondToAfd",
        scaling_behavior: String => "scalingBehavior",
        sharpness: Integer => "sharpness",
        width: Integer => "width",
    }

    VideoCodecSettings {
        frame_capture_settings: FrameCaptureSettings => "frameCaptureSettings",
        h264_settings: H264Settings => "h264Settings",
        h265_settings: H265Settings => "h265Settings",
        mpeg2_settings: Mpeg2Settings => "mpeg2Settings",
    }

    FrameCaptureSettings {
        capture_interval: Integer => "captureInterval",
        capture_interval_units: String => "captureIntervalUnits",
        timecode_burnin_settings: TimecodeBurninSettings => "timecodeBurninSettings",
    }

    TimecodeBurninSettings {
        font_size: String => "fontSize",
        position: String => "position",
        prefix: String => "prefix",
    }

    H264Settings {
        adaptive_quantization: String => "adaptiveQuantization",
        afd_signaling: String => "afdSignaling",
        bitrate: Integer => "bitrate",
        buf_fill_pct: Integer => "bufFillPct",
        buf_size: Integer => "bufSize",
        color_metadata: String => "colorMetadata",
        color_space_settings: H264ColorSpaceSettings => "colorSpaceSettings",
        entropy_encoding: String => "entropyEncoding",
        filter_settings: H264FilterSettings => "filterSettings",
        fixed_afd: String => "fixedAfd",
        flicker_aq: String => "flickerAq",
        force_field_pictures: String => "forceFieldPictures",
        framerate_control: String => "framerateControl",
        framerate_denominator: Integer => "framerateDenominator",
        framerate_numerator: Integer => "framerateNumerator",
        gop_b_reference: String => "gopBReference",
        gop_closed_cadence: Integer => "gopClosedCadence",
        gop_num_b_frames: Integer => "gopNumBFrames",
        gop_size: Double => "gopSize",
        gop_size_units: String => "gopSizeUnits",
        level: String => "level",
        look_ahead_rate_control: String => "lookAheadRateControl",
        max_bitrate: Integer => "maxBitrate",
        min_i_interval: Integer => "minIInterval",
        num_ref_frames: Integer => "numRefFrames",
        par_control: String => "parControl",
        par_denominator: Integer => "parDenominator",
        par_numerator: Integer => "parNumerator",
        profile: String => "profile",
        quality_level: String => "qualityLevel",
        qvbr_quality_level: Integer => "qvbrQualityLevel",
        rate_control_mode: String => "rateControlMode",
        scan_type: String => "scanType",
        scene_change_detect: String => "sceneChangeDetect",
        slices: Integer => "slices",
        softness: Integer => "softness",
        spatial_aq: String => "spatialAq",
        subgop_length: String => "subgopLength",
        syntax: String => "syntax",
        temporal_aq: String => "temporalAq",
        timecode_burnin_settings: TimecodeBurninSettings => "timecodeBurninSettings",
        timecode_insertion: String => "timecodeInsertion",
    }

    H264ColorSpaceSettings {
        color_space_passthrough_settings: ColorSpacePassthroughSettings => "colorSpacePassthroughSettings",
        rec601_settings: Rec601Settings => "rec601Settings",
        rec709_settings: Rec709Settings => "rec709Settings",
    }

    H264FilterSettings {
        temporal_filter_settings: TemporalFilterSettings => "temporalFilterSettings",
    }

    H265Settings {
        adaptive_quantization: String => "adaptiveQuantization",
        afd_signaling: String => "afdSignaling",
        alternative_transfer_function: String => "alternativeTransferFunction",
        bitrate: Integer => "bitrate",
        buf_size: Integer => "bufSize",
        color_metadata: String => "colorMetadata",
        color_space_settings: H265ColorSpaceSettings => "colorSpaceSettings",
        filter_settings: H265FilterSettings => "filterSettings",
        fixed_afd: String => "fixedAfd",
        flicker_aq: String => "flickerAq",
        framerate_denominator: Integer => "framerateDenominator",
        framerate_numerator: Integer => "framerateNumerator",
        gop_closed_cadence: Integer => "gopClosedCadence",
        gop_size: Double => "gopSize",
        gop_size_units: String => "gopSizeUnits",
        level: String => "level",
        look_ahead_rate_control: String => "lookAheadRateControl",
        max_bitrate: Integer => "maxBitrate",
        min_i_interval: Integer => "minIInterval",
        par_denominator: Integer => "parDenominator",
        par_numerator: Integer => "parNumerator",
        profile: String => "profile",
        qvbr_quality_level: Integer => "qvbrQualityLevel",
        rate_control_mode: String => "rateControlMode",
        scan_type: String => "scanType",
        scene_change_detect: String => "sceneChangeDetect",
        slices: Integer => "slices",
        tier: String => "tier",
        timecode_burnin_settings: TimecodeBurninSettings => "timecodeBurninSettings",
        timecode_insertion: String => "timecodeInsertion",
    }

    H265ColorSpaceSettings {
        color_space_passthrough_settings: ColorSpacePassthroughSettings => "colorSpacePassthroughSettings",
        dolby_vision81_settings: DolbyVision81Settings => "dolbyVision81Settings",
        hdr10_settings: Hdr10Settings => "hdr10Settings",
        rec601_settings: Rec601Settings => "rec601Settings",
        rec709_settings: Rec709Settings => "rec709Settings",
    }

    H265FilterSettings {
        temporal_filter_settings: TemporalFilterSettings => "temporalFilterSettings",
    }

    Mpeg2Settings {
        adaptive_quantization: String => "adaptiveQuantization",
        afd_signaling: String => "afdSignaling",
        color_metadata: String => "colorMetadata",
        color_space: String => "colorSpace",
        display_aspect_ratio: String => "displayAspectRatio",
        filter_settings: Mpeg2FilterSettings => "filterSettings",
        fixed_afd: String => "fixedAfd",
        framerate_denominator: Integer => "framerateDenominator",
        framerate_numerator: Integer => "framerateNumerator",
        gop_closed_cadence: Integer => "gopClosedCadence",
        gop_num_b_frames: Integer => "gopNumBFrames",
        gop_size: Double => "gopSize",
        gop_size_units: String => "gopSizeUnits",
        scan_type: String => "scanType",
        subgop_length: String => "subgopLength",
        timecode_burnin_settings: TimecodeBurninSettings => "timecodeBurninSettings",
        timecode_insertion: String => "timecodeInsertion",
    }

    Mpeg2FilterSettings {
        temporal_filter_settings: TemporalFilterSettings => "temporalFilterSettings",
    }

    TemporalFilterSettings {
        post_filter_sharpening: String => "postFilterSharpening",
        strength: String => "strength",
    }

    ColorSpacePassthroughSettings {}

    DolbyVision81Settings {}

    Rec601Settings {}

    Rec709Settings {}
}
