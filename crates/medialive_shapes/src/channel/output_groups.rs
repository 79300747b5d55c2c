//! Output groups, their outputs, and the container settings of each
//! delivery protocol.

use super::*;

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = OUTPUT_GROUP_SCHEMAS;

    OutputGroup {
        name: String => "name",
        output_group_settings: OutputGroupSettings => "outputGroupSettings",
        outputs: [Output] => "outputs",
    }

    OutputGroupSettings {
        archive_group_settings: ArchiveGroupSettings => "archiveGroupSettings",
        frame_capture_group_settings: FrameCaptureGroupSettings => "frameCaptureGroupSettings",
        hls_group_settings: HlsGroupSettings => "hlsGroupSettings",
        media_package_group_settings: MediaPackageGroupSettings => "mediaPackageGroupSettings",
        ms_smooth_group_settings: MsSmoothGroupSettings => "msSmoothGroupSettings",
        multiplex_group_settings: MultiplexGroupSettings => "multiplexGroupSettings",
        rtmp_group_settings: RtmpGroupSettings => "rtmpGroupSettings",
        udp_group_settings: UdpGroupSettings => "udpGroupSettings",
    }

    /// Reference to an [`OutputDestination`] by id.
    OutputLocationRef {
        destination_ref_id: String => "destinationRefId",
    }

    ArchiveGroupSettings {
        archive_cdn_settings: ArchiveCdnSettings => "archiveCdnSettings",
        destination: OutputLocationRef => "destination",
        rollover_interval: Integer => "rolloverInterval",
    }

    ArchiveCdnSettings {
        archive_s3_settings: ArchiveS3Settings => "archiveS3Settings",
    }

    ArchiveS3Settings {
        canned_acl: String => "cannedAcl",
    }

    FrameCaptureGroupSettings {
        destination: OutputLocationRef => "destination",
        frame_capture_cdn_settings: FrameCaptureCdnSettings => "frameCaptureCdnSettings",
    }

    FrameCaptureCdnSettings {
        frame_capture_s3_settings: FrameCaptureS3Settings => "frameCaptureS3Settings",
    }

    FrameCaptureS3Settings {
        canned_acl: String => "cannedAcl",
    }

    HlsGroupSettings {
        ad_markers: [String] => "adMarkers",
        base_url_content: String => "baseUrlContent",
        base_url_content1: String => "baseUrlContent1",
        base_url_manifest: String => "baseUrlManifest",
        base_url_manifest1: String => "baseUrlManifest1",
        caption_language_mappings: [CaptionLanguageMapping] => "captionLanguageMappings",
        caption_language_setting: String => "captionLanguageSetting",
        client_cache: String => "clientCache",
        codec_specification: String => "codecSpecification",
        constant_iv: String => "constantIv",
        destination: OutputLocationRef => "destination",
        directory_structure: String => "directoryStructure",
        discontinuity_tags: String => "discontinuityTags",
        encryption_type: String => "encryptionType",
        hls_cdn_settings: HlsCdnSettings => "hlsCdnSettings",
        hls_id3_segment_tagging: String => "hlsId3SegmentTagging",
        i_frame_only_playlists: String => "iFrameOnlyPlaylists",
        incomplete_segment_behavior: String => "incompleteSegmentBehavior",
        index_n_segments: Integer => "indexNSegments",
        input_loss_action: String => "inputLossAction",
        iv_in_manifest: String => "ivInManifest",
        iv_source: String => "ivSource",
        keep_segments: Integer => "keepSegments",
        key_format: String => "keyFormat",
        key_format_versions: String => "keyFormatVersions",
        key_provider_settings: KeyProviderSettings => "keyProviderSettings",
        manifest_compression: String => "manifestCompression",
        manifest_duration_format: String => "manifestDurationFormat",
        min_segment_length: Integer => "minSegmentLength",
        mode: String => "mode",
        output_selection: String => "outputSelection",
        program_date_time: String => "programDateTime",
        program_date_time_clock: String => "programDateTimeClock",
        program_date_time_period: Integer => "programDateTimePeriod",
        redundant_manifest: String => "redundantManifest",
        segment_length: Integer => "segmentLength",
        segmentation_mode: String => "segmentationMode",
        segments_per_subdirectory: Integer => "segmentsPerSubdirectory",
        stream_inf_resolution: String => "streamInfResolution",
        timed_metadata_id3_frame: String => "timedMetadataId3Frame",
        timed_metadata_id3_period: Integer => "timedMetadataId3Period",
        timestamp_delta_milliseconds: Integer => "timestampDeltaMilliseconds",
        ts_file_mode: String => "tsFileMode",
    }

    CaptionLanguageMapping {
        caption_channel: Integer => "captionChannel",
        language_code: String => "languageCode",
        language_description: String => "languageDescription",
    }

    HlsCdnSettings {
        hls_akamai_settings: HlsAkamaiSettings => "hlsAkamaiSettings",
        hls_basic_put_settings: HlsBasicPutSettings => "hlsBasicPutSettings",
        hls_media_store_settings: HlsMediaStoreSettings => "hlsMediaStoreSettings",
        hls_s3_settings: HlsS3Settings => "hlsS3Settings",
        hls_webdav_settings: HlsWebdavSettings => "hlsWebdavSettings",
    }

    HlsAkamaiSettings {
        connection_retry_interval: Integer => "connectionRetryInterval",
        filecache_duration: Integer => "filecacheDuration",
        http_transfer_mode: String => "httpTransferMode",
        num_retries: Integer => "numRetries",
        restart_delay: Integer => "restartDelay",
        salt: String => "salt",
        token: String => "token",
    }

    HlsBasicPutSettings {
        connection_retry_interval: Integer => "connectionRetryInterval",
        filecache_duration: Integer => "filecacheDuration",
        num_retries: Integer => "numRetries",
        restart_delay: Integer => "restartDelay",
    }

    HlsMediaStoreSettings {
        connection_retry_interval: Integer => "connectionRetryInterval",
        filecache_duration: Integer => "filecacheDuration",
        media_store_storage_class: String => "mediaStoreStorageClass",
        num_retries: Integer => "numRetries",
        restart_delay: Integer => "restartDelay",
    }

    HlsS3Settings {
        canned_acl: String => "cannedAcl",
    }

    HlsWebdavSettings {
        connection_retry_interval: Integer => "connectionRetryInterval",
        filecache_duration: Integer => "filecacheDuration",
        http_transfer_mode: String => "httpTransferMode",
        num_retries: Integer => "numRetries",
        restart_delay: Integer => "restartDelay",
    }

    KeyProviderSettings {
        static_key_settings: StaticKeySettings => "staticKeySettings",
    }

    StaticKeySettings {
        key_provider_server: InputLocation => "keyProviderServer",
        static_key_value: String => "staticKeyValue",
    }

    MediaPackageGroupSettings {
        destination: OutputLocationRef => "destination",
    }

    MsSmoothGroupSettings {
        acquisition_point_id: String => "acquisitionPointId",
        audio_only_timecode_control: String => "audioOnlyTimecodeControl",
        certificate_mode: String => "certificateMode",
        connection_retry_interval: Integer => "connectionRetryInterval",
        destination: OutputLocationRef => "destination",
        event_id: String => "eventId",
        event_id_mode: String => "eventIdMode",
        event_stop_behavior: String => "eventStopBehavior",
        filecache_duration: Integer => "filecacheDuration",
        fragment_length: Integer => "fragmentLength",
        input_loss_action: String => "inputLossAction",
        num_retries: Integer => "numRetries",
        restart_delay: Integer => "restartDelay",
        segmentation_mode: String => "segmentationMode",
        send_delay_ms: Integer => "sendDelayMs",
        sparse_track_type: String => "sparseTrackType",
        stream_manifest_behavior: String => "streamManifestBehavior",
        timestamp_offset: String => "timestampOffset",
        timestamp_offset_mode: String => "timestampOffsetMode",
    }

    MultiplexGroupSettings {}

    RtmpGroupSettings {
        ad_markers: [String] => "adMarkers",
        authentication_scheme: String => "authenticationScheme",
        cache_full_behavior: String => "cacheFullBehavior",
        cache_length: Integer => "cacheLength",
        caption_data: String => "captionData",
        input_loss_action: String => "inputLossAction",
        restart_delay: Integer => "restartDelay",
    }

    UdpGroupSettings {
        input_loss_action: String => "inputLossAction",
        timed_metadata_id3_frame: String => "timedMetadataId3Frame",
        timed_metadata_id3_period: Integer => "timedMetadataId3Period",
    }

    /// One output of a group: which encodes it carries and how it is packaged.
    Output {
        audio_description_names: [String] => "audioDescriptionNames",
        caption_description_names: [String] => "captionDescriptionNames",
        output_name: String => "outputName",
        output_settings: OutputSettings => "outputSettings",
        video_description_name: String => "videoDescriptionName",
    }

    OutputSettings {
        archive_output_settings: ArchiveOutputSettings => "archiveOutputSettings",
        frame_capture_output_settings: FrameCaptureOutputSettings => "frameCaptureOutputSettings",
        hls_output_settings: HlsOutputSettings => "hlsOutputSettings",
        media_package_output_settings: MediaPackageOutputSettings => "mediaPackageOutputSettings",
        ms_smooth_output_settings: MsSmoothOutputSettings => "msSmoothOutputSettings",
        multiplex_output_settings: MultiplexOutputSettings => "multiplexOutputSettings",
        rtmp_output_settings: RtmpOutputSettings => "rtmpOutputSettings",
        udp_output_settings: UdpOutputSettings => "udpOutputSettings",
    }

    ArchiveOutputSettings {
        container_settings: ArchiveContainerSettings => "containerSettings",
        extension: String => "extension",
        name_modifier: String => "nameModifier",
    }

    ArchiveContainerSettings {
        m2ts_settings: M2tsSettings => "m2tsSettings",
        raw_settings: RawSettings => "rawSettings",
    }

    RawSettings {}

    M2tsSettings {
        absent_input_audio_behavior: String => "absentInputAudioBehavior",
        arib: String => "arib",
        arib_captions_pid: String => "aribCaptionsPid",
        arib_captions_pid_control: String => "aribCaptionsPidControl",
        audio_buffer_model: String => "audioBufferModel",
        audio_frames_per_pes: Integer => "audioFramesPerPes",
        audio_pids: String => "audioPids",
        audio_stream_type: String => "audioStreamType",
        bitrate: Integer => "bitrate",
        buffer_model: String => "bufferModel",
        cc_descriptor: String => "ccDescriptor",
        dvb_nit_settings: DvbNitSettings => "dvbNitSettings",
        dvb_sdt_settings: DvbSdtSettings => "dvbSdtSettings",
        dvb_sub_pids: String => "dvbSubPids",
        dvb_tdt_settings: DvbTdtSettings => "dvbTdtSettings",
        dvb_teletext_pid: String => "dvbTeletextPid",
        ebif: String => "ebif",
        ebp_audio_interval: String => "ebpAudioInterval",
        ebp_lookahead_ms: Integer => "ebpLookaheadMs",
        ebp_placement: String => "ebpPlacement",
        ecm_pid: String => "ecmPid",
        es_rate_in_pes: String => "esRateInPes",
        etv_platform_pid: String => "etvPlatformPid",
        etv_signal_pid: String => "etvSignalPid",
        fragment_time: Double => "fragmentTime",
        klv: String => "klv",
        klv_data_pids: String => "klvDataPids",
        nielsen_id3_behavior: String => "nielsenId3Behavior",
        null_packet_bitrate: Double => "nullPacketBitrate",
        pat_interval: Integer => "patInterval",
        pcr_control: String => "pcrControl",
        pcr_period: Integer => "pcrPeriod",
        pcr_pid: String => "pcrPid",
        pmt_interval: Integer => "pmtInterval",
        pmt_pid: String => "pmtPid",
        program_num: Integer => "programNum",
        rate_mode: String => "rateMode",
        scte27_pids: String => "scte27Pids",
        scte35_control: String => "scte35Control",
        scte35_pid: String => "scte35Pid",
        segmentation_markers: String => "segmentationMarkers",
        segmentation_style: String => "segmentationStyle",
        segmentation_time: Double => "segmentationTime",
        timed_metadata_behavior: String => "timedMetadataBehavior",
        timed_metadata_pid: String => "timedMetadataPid",
        transport_stream_id: Integer => "transportStreamId",
        video_pid: String => "videoPid",
    }

    DvbNitSettings {
        network_id: Integer => "networkId",
        network_name: String => "networkName",
        rep_interval: Integer => "repInterval",
    }

    DvbSdtSettings {
        output_sdt: String => "outputSdt",
        rep_interval: Integer => "repInterval",
        service_name: String => "serviceName",
        service_provider_name: String => "serviceProviderName",
    }

    DvbTdtSettings {
        rep_interval: Integer => "repInterval",
    }

    FrameCaptureOutputSettings {
        name_modifier: String => "nameModifier",
    }

    HlsOutputSettings {
        h265_packaging_type: String => "h265PackagingType",
        hls_settings: HlsSettings => "hlsSettings",
        name_modifier: String => "nameModifier",
        segment_modifier: String => "segmentModifier",
    }

    HlsSettings {
        audio_only_hls_settings: AudioOnlyHlsSettings => "audioOnlyHlsSettings",
        fmp4_hls_settings: Fmp4HlsSettings => "fmp4HlsSettings",
        frame_capture_hls_settings: FrameCaptureHlsSettings => "frameCaptureHlsSettings",
        standard_hls_settings: StandardHlsSettings => "standardHlsSettings",
    }

    AudioOnlyHlsSettings {
        audio_group_id: String => "audioGroupId",
        audio_only_image: InputLocation => "audioOnlyImage",
        audio_track_type: String => "audioTrackType",
        segment_type: String => "segmentType",
    }

    Fmp4HlsSettings {
        audio_rendition_sets: String => "audioRenditionSets",
        nielsen_id3_behavior: String => "nielsenId3Behavior",
        timed_metadata_behavior: String => "timedMetadataBehavior",
    }

    FrameCaptureHlsSettings {}

    StandardHlsSettings {
        audio_rendition_sets: String => "audioRenditionSets",
        m3u8_settings: M3u8Settings => "m3u8Settings",
    }

    M3u8Settings {
        audio_frames_per_pes: Integer => "audioFramesPerPes",
        audio_pids: String => "audioPids",
        ecm_pid: String => "ecmPid",
        klv_behavior: String => "klvBehavior",
        klv_data_pids: String => "klvDataPids",
        nielsen_id3_behavior: String => "nielsenId3Behavior",
        pat_interval: Integer => "patInterval",
        pcr_control: String => "pcrControl",
        pcr_period: Integer => "pcrPeriod",
        pcr_pid: String => "pcrPid",
        pmt_interval: Integer => "pmtInterval",
        pmt_pid: String => "pmtPid",
        program_num: Integer => "programNum",
        scte35_behavior: String => "scte35Behavior",
        scte35_pid: String => "scte35Pid",
        timed_metadata_behavior: String => "timedMetadataBehavior",
        timed_metadata_pid: String => "timedMetadataPid",
        transport_stream_id: Integer => "transportStreamId",
        video_pid: String => "videoPid",
    }

    MediaPackageOutputSettings {}

    MsSmoothOutputSettings {
        h265_packaging_type: String => "h265PackagingType",
        name_modifier: String => "nameModifier",
    }

    MultiplexOutputSettings {
        destination: OutputLocationRef => "destination",
    }

    RtmpOutputSettings {
        certificate_mode: String => "certificateMode",
        connection_retry_interval: Integer => "connectionRetryInterval",
        destination: OutputLocationRef => "destination",
        num_retries: Integer => "numRetries",
    }

    UdpOutputSettings {
        buffer_msec: Integer => "bufferMsec",
        container_settings: UdpContainerSettings => "containerSettings",
        destination: OutputLocationRef => "destination",
        fec_output_settings: FecOutputSettings => "fecOutputSettings",
    }

    UdpContainerSettings {
        m2ts_settings: M2tsSettings => "m2tsSettings",
    }

    FecOutputSettings {
        column_depth: Integer => "columnDepth",
        include_fec: String => "includeFec",
        row_length: Integer => "rowLength",
    }
}
