//! Audio encodes of a channel: descriptions, codecs, normalization, remixing
//! and watermarking.

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = AUDIO_SCHEMAS;

    /// One audio encode, referenced by name from outputs.
    AudioDescription {
        audio_normalization_settings: AudioNormalizationSettings => "audioNormalizationSettings",
        audio_selector_name: String => "audioSelectorName",
        audio_type: String => "audioType",
        audio_type_control: String => "audioTypeControl",
        audio_watermarking_settings: AudioWatermarkSettings => "audioWatermarkingSettings",
        codec_settings: AudioCodecSettings => "codecSettings",
        language_code: String => "languageCode",
        language_code_control: String => "languageCodeControl",
        name: String => "name",
        remix_settings: RemixSettings => "remixSettings",
        stream_name: String => "streamName",
    }

    AudioNormalizationSettings {
        algorithm: String => "algorithm",
        algorithm_control: String => "algorithmControl",
        target_lkfs: Double => "targetLkfs",
    }

    AudioWatermarkSettings {
        nielsen_watermarks_settings: NielsenWatermarksSettings => "nielsenWatermarksSettings",
    }

    NielsenWatermarksSettings {
        nielsen_cbet_settings: NielsenCBET => "nielsenCbetSettings",
        nielsen_distribution_type: String => "nielsenDistributionType",
        nielsen_naes_ii_nw_settings: NielsenNaesIiNw => "nielsenNaesIiNwSettings",
    }

    NielsenCBET {
        cbet_check_digit_string: String => "cbetCheckDigitString",
        cbet_stepaside: String => "cbetStepaside",
        csid: String => "csid",
    }

    NielsenNaesIiNw {
        check_digit_string: String => "checkDigitString",
        sid: Double => "sid",
    }

    /// Codec of an audio description. Exactly one member is expected to be
    /// set; that rule is left to the service.
    AudioCodecSettings {
        aac_settings: AacSettings => "aacSettings",
        ac3_settings: Ac3Settings => "ac3Settings",
        eac3_atmos_settings: Eac3AtmosSettings => "eac3AtmosSettings",
        eac3_settings: Eac3Settings => "eac3Settings",
        mp2_settings: Mp2Settings => "mp2Settings",
        pass_through_settings: PassThroughSettings => "passThroughSettings",
        wav_settings: WavSettings => "wavSettings",
    }

    AacSettings {
        bitrate: Double => "bitrate",
        coding_mode: String => "codingMode",
        input_type: String => "inputType",
        profile: String => "profile",
        rate_control_mode: String => "rateControlMode",
        raw_format: String => "rawFormat",
        sample_rate: Double => "sampleRate",
        spec: String => "spec",
        vbr_quality: String => "vbrQuality",
    }

    Ac3Settings {
        bitrate: Double => "bitrate",
        bitstream_mode: String => "bitstreamMode",
        coding_mode: String => "codingMode",
        dialnorm: Integer => "dialnorm",
        drc_profile: String => "drcProfile",
        lfe_filter: String => "lfeFilter",
        metadata_control: String => "metadataControl",
    }

    Eac3AtmosSettings {
        bitrate: Double => "bitrate",
        coding_mode: String => "codingMode",
        dialnorm: Integer => "dialnorm",
        drc_line: String => "drcLine",
        drc_rf: String => "drcRf",
        height_trim: Double => "heightTrim",
        surround_trim: Double => "surroundTrim",
    }

    Eac3Settings {
        attenuation_control: String => "attenuationControl",
        bitrate: Double => "bitrate",
        bitstream_mode: String => "bitstreamMode",
        coding_mode: String => "codingMode",
        dc_filter: String => "dcFilter",
        dialnorm: Integer => "dialnorm",
        drc_line: String => "drcLine",
        drc_rf: String => "drcRf",
        lfe_control: String => "lfeControl",
        lfe_filter: String => "lfeFilter",
        lo_ro_center_mix_level: Double => "loRoCenterMixLevel",
        lo_ro_surround_mix_level: Double => "loRoSurroundMixLevel",
        lt_rt_center_mix_level: Double => "ltRtCenterMixLevel",
        lt_rt_surround_mix_level: Double => "ltRtSurroundMixLevel",
        metadata_control: String => "metadataControl",
        passthrough_control: String => "passthroughControl",
        phase_control: String => "phaseControl",
        stereo_downmix: String => "stereoDownmix",
        surround_ex_mode: String => "surroundExMode",
        surround_mode: String => "surroundMode",
    }

    Mp2Settings {
        bitrate: Double => "bitrate",
        coding_mode: String => "codingMode",
        sample_rate: Double => "sampleRate",
    }

    PassThroughSettings {}

    WavSettings {
        bit_depth: Double => "bitDepth",
        coding_mode: String => "codingMode",
        sample_rate: Double => "sampleRate",
    }

    RemixSettings {
        channel_mappings: [AudioChannelMapping] => "channelMappings",
        channels_in: Integer => "channelsIn",
        channels_out: Integer => "channelsOut",
    }

    AudioChannelMapping {
        input_channel_levels: [InputChannelLevel] => "inputChannelLevels",
        output_channel: Integer => "outputChannel",
    }

    InputChannelLevel {
        gain: Integer => "gain",
        input_channel: Integer => "inputChannel",
    }
}
