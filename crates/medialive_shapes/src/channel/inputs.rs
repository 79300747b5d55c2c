//! Input attachments of a channel: failover, selectors and per-input
//! decoding settings.

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = INPUT_ATTACHMENT_SCHEMAS;

    /// Attaches an `AWS::MediaLive::Input` to the channel.
    InputAttachment {
        automatic_input_failover_settings: AutomaticInputFailoverSettings => "automaticInputFailoverSettings",
        input_attachment_name: String => "inputAttachmentName",
        input_id: String => "inputId",
        input_settings: InputSettings => "inputSettings",
    }

    AutomaticInputFailoverSettings {
        error_clear_time_msec: Integer => "errorClearTimeMsec",
        failover_conditions: [FailoverCondition] => "failoverConditions",
        input_preference: String => "inputPreference",
        secondary_input_id: String => "secondaryInputId",
    }

    FailoverCondition {
        failover_condition_settings: FailoverConditionSettings => "failoverConditionSettings",
    }

    FailoverConditionSettings {
        audio_silence_settings: AudioSilenceFailoverSettings => "audioSilenceSettings",
        input_loss_settings: InputLossFailoverSettings => "inputLossSettings",
        video_black_settings: VideoBlackFailoverSettings => "videoBlackSettings",
    }

    AudioSilenceFailoverSettings {
        audio_selector_name: String => "audioSelectorName",
        audio_silence_threshold_msec: Integer => "audioSilenceThresholdMsec",
    }

    InputLossFailoverSettings {
        input_loss_threshold_msec: Integer => "inputLossThresholdMsec",
    }

    VideoBlackFailoverSettings {
        black_detect_threshold: Double => "blackDetectThreshold",
        video_black_threshold_msec: Integer => "videoBlackThresholdMsec",
    }

    InputSettings {
        audio_selectors: [AudioSelector] => "audioSelectors",
        caption_selectors: [CaptionSelector] => "captionSelectors",
        deblock_filter: String => "deblockFilter",
        denoise_filter: String => "denoiseFilter",
        filter_strength: Integer => "filterStrength",
        input_filter: String => "inputFilter",
        network_input_settings: NetworkInputSettings => "networkInputSettings",
        scte35_pid: Integer => "scte35Pid",
        smpte2038_data_preference: String => "smpte2038DataPreference",
        source_end_behavior: String => "sourceEndBehavior",
        video_selector: VideoSelector => "videoSelector",
    }

    NetworkInputSettings {
        hls_input_settings: HlsInputSettings => "hlsInputSettings",
        server_validation: String => "serverValidation",
    }

    HlsInputSettings {
        bandwidth: Integer => "bandwidth",
        buffer_segments: Integer => "bufferSegments",
        retries: Integer => "retries",
        retry_interval: Integer => "retryInterval",
        scte35_source: String => "scte35Source",
    }

    AudioSelector {
        name: String => "name",
        selector_settings: AudioSelectorSettings => "selectorSettings",
    }

    AudioSelectorSettings {
        audio_hls_rendition_selection: AudioHlsRenditionSelection => "audioHlsRenditionSelection",
        audio_language_selection: AudioLanguageSelection => "audioLanguageSelection",
        audio_pid_selection: AudioPidSelection => "audioPidSelection",
        audio_track_selection: AudioTrackSelection => "audioTrackSelection",
    }

    AudioHlsRenditionSelection {
        group_id: String => "groupId",
        name: String => "name",
    }

    AudioLanguageSelection {
        language_code: String => "languageCode",
        language_selection_policy: String => "languageSelectionPolicy",
    }

    AudioPidSelection {
        pid: Integer => "pid",
    }

    AudioTrackSelection {
        dolby_e_decode: AudioDolbyEDecode => "dolbyEDecode",
        tracks: [AudioTrack] => "tracks",
    }

    AudioDolbyEDecode {
        program_selection: String => "programSelection",
    }

    AudioTrack {
        track: Integer => "track",
    }

    CaptionSelector {
        language_code: String => "languageCode",
        name: String => "name",
        selector_settings: CaptionSelectorSettings => "selectorSettings",
    }

    CaptionSelectorSettings {
        ancillary_source_settings: AncillarySourceSettings => "ancillarySourceSettings",
        arib_source_settings: AribSourceSettings => "aribSourceSettings",
        dvb_sub_source_settings: DvbSubSourceSettings => "dvbSubSourceSettings",
        embedded_source_settings: EmbeddedSourceSettings => "embeddedSourceSettings",
        scte20_source_settings: Scte20SourceSettings => "scte20SourceSettings",
        scte27_source_settings: Scte27SourceSettings => "scte27SourceSettings",
        teletext_source_settings: TeletextSourceSettings => "teletextSourceSettings",
    }

    AncillarySourceSettings {
        source_ancillary_channel_number: Integer => "sourceAncillaryChannelNumber",
    }

    AribSourceSettings {}

    DvbSubSourceSettings {
        ocr_language: String => "ocrLanguage",
        pid: Integer => "pid",
    }

    EmbeddedSourceSettings {
        convert608_to708: String => "convert608To708",
        scte20_detection: String => "scte20Detection",
        source608_channel_number: Integer => "source608ChannelNumber",
        source608_track_number: Integer => "source608TrackNumber",
    }

    Scte20SourceSettings {
        convert608_to708: String => "convert608To708",
        source608_channel_number: Integer => "source608ChannelNumber",
    }

    Scte27SourceSettings {
        ocr_language: String => "ocrLanguage",
        pid: Integer => "pid",
    }

    TeletextSourceSettings {
        output_rectangle: CaptionRectangle => "outputRectangle",
        page_number: String => "pageNumber",
    }

    CaptionRectangle {
        height: Double => "height",
        left_offset: Double => "leftOffset",
        top_offset: Double => "topOffset",
        width: Double => "width",
    }

    VideoSelector {
        color_space: String => "colorSpace",
        color_space_settings: VideoSelectorColorSpaceSettings => "colorSpaceSettings",
        color_space_usage: String => "colorSpaceUsage",
        selector_settings: VideoSelectorSettings => "selectorSettings",
    }

    VideoSelectorColorSpaceSettings {
        hdr10_settings: Hdr10Settings => "hdr10Settings",
    }

    Hdr10Settings {
        max_cll: Integer => "maxCll",
        max_fall: Integer => "maxFall",
    }

    VideoSelectorSettings {
        video_selector_pid: VideoSelectorPid => "videoSelectorPid",
        video_selector_program_id: VideoSelectorProgramId => "videoSelectorProgramId",
    }

    VideoSelectorPid {
        pid: Integer => "pid",
    }

    VideoSelectorProgramId {
        program_id: Integer => "programId",
    }
}
