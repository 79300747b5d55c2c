//! Caption encodes and their per-format destination settings.

use super::*;

medialive_core::define_records! {
    namespace = "AWS::MediaLive::Channel";
    index = CAPTION_SCHEMAS;

    CaptionDescription {
        accessibility: String => "accessibility",
        caption_selector_name: String => "captionSelectorName",
        destination_settings: CaptionDestinationSettings => "destinationSettings",
        language_code: String => "languageCode",
        language_description: String => "languageDescription",
        name: String => "name",
    }

    CaptionDestinationSettings {
        arib_destination_settings: AribDestinationSettings => "aribDestinationSettings",
        burn_in_destination_settings: BurnInDestinationSettings => "burnInDestinationSettings",
        dvb_sub_destination_settings: DvbSubDestinationSettings => "dvbSubDestinationSettings",
        ebu_tt_d_destination_settings: EbuTtDDestinationSettings => "ebuTtDDestinationSettings",
        embedded_destination_settings: EmbeddedDestinationSettings => "embeddedDestinationSettings",
        embedded_plus_scte20_destination_settings: EmbeddedPlusScte20DestinationSettings => "embeddedPlusScte20DestinationSettings",
        rtmp_caption_info_destination_settings: RtmpCaptionInfoDestinationSettings => "rtmpCaptionInfoDestinationSettings",
        scte20_plus_embedded_destination_settings: Scte20PlusEmbeddedDestinationSettings => "scte20PlusEmbeddedDestinationSettings",
        scte27_destination_settings: Scte27DestinationSettings => "scte27DestinationSettings",
        smpte_tt_destination_settings: SmpteTtDestinationSettings => "smpteTtDestinationSettings",
        teletext_destination_settings: TeletextDestinationSettings => "teletextDestinationSettings",
        ttml_destination_settings: TtmlDestinationSettings => "ttmlDestinationSettings",
        webvtt_destination_settings: WebvttDestinationSettings => "webvttDestinationSettings",
    }

    BurnInDestinationSettings {
        alignment: String => "alignment",
        background_color: String => "backgroundColor",
        background_opacity: Integer => "backgroundOpacity",
        font: InputLocation => "font",
        font_color: String => "fontColor",
        font_opacity: Integer => "fontOpacity",
        font_resolution: Integer => "fontResolution",
        font_size: String => "fontSize",
        outline_color: String => "outlineColor",
        outline_size: Integer => "outlineSize",
        shadow_color: String => "shadowColor",
        shadow_opacity: Integer => "shadowOpacity",
        shadow_x_offset: Integer => "shadowXOffset",
        shadow_y_offset: Integer => "shadowYOffset",
        teletext_grid_control: String => "teletextGridControl",
        x_position: Integer => "xPosition",
        y_position: Integer => "yPosition",
    }

    DvbSubDestinationSettings {
        alignment: String => "alignment",
        background_color: String => "backgroundColor",
        background_opacity: Integer => "backgroundOpacity",
        font: InputLocation => "font",
        font_color: String => "fontColor",
        font_opacity: Integer => "fontOpacity",
        font_resolution: Integer => "fontResolution",
        font_size: String => "fontSize",
        outline_color: String => "outlineColor",
        outline_size: Integer => "outlineSize",
        shadow_color: String => "shadowColor",
        shadow_opacity: Integer => "shadowOpacity",
        shadow_x_offset: Integer => "shadowXOffset",
        shadow_y_offset: Integer => "shadowYOffset",
        teletext_grid_control: String => "teletextGridControl",
        x_position: Integer => "xPosition",
        y_position: Integer => "yPosition",
    }

    EbuTtDDestinationSettings {
        copyright_holder: String => "copyrightHolder",
        fill_line_gap: String => "fillLineGap",
        font_family: String => "fontFamily",
        style_control: String => "styleControl",
    }

    TtmlDestinationSettings {
        style_control: String => "styleControl",
    }

    WebvttDestinationSettings {
        style_control: String => "styleControl",
    }

    AribDestinationSettings {}

    EmbeddedDestinationSettings {}

    EmbeddedPlusScte20DestinationSettings {}

    RtmpCaptionInfoDestinationSettings {}

    Scte20PlusEmbeddedDestinationSettings {}

    Scte27DestinationSettings {}

    SmpteTtDestinationSettings {}

    TeletextDestinationSettings {}
}
