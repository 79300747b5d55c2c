//! Integration tests for the MediaLive property records.

use medialive_core::{map_to_json, Element, ScalarType, Shape};
use medialive_shapes::channel::{
    AacSettings, Ac3Settings, ArchiveContainerSettings, AudioCodecSettings, AudioDescription,
    ChannelProps, EncoderSettings, H264Settings, M2tsSettings, OutputDestination,
    OutputDestinationSettings, RawSettings, VideoCodecSettings, VideoDescription,
};
use medialive_shapes::input::{InputProps, InputSourceRequest};
use medialive_shapes::input_security_group::{InputSecurityGroupProps, InputWhitelistRuleCidr};
use medialive_shapes::{
    all_schemas, Deferred, Intrinsic, Record, RecordType, ShapeError, Value,
};
use serde_json::json;

fn legal_value(shape: &Shape) -> Value {
    match shape {
        Shape::Scalar(ScalarType::String) => Value::from("VALUE"),
        Shape::Scalar(ScalarType::Integer) => Value::from(7),
        Shape::Scalar(ScalarType::Double) => Value::from(0.25),
        Shape::Scalar(ScalarType::Boolean) => Value::from(true),
        Shape::Record(schema) => Value::Record(Record::empty(schema())),
        Shape::Union(variants) => Value::Record(Record::empty(variants[0]())),
        Shape::List(Element::Scalar(ScalarType::String)) => Value::from(vec!["a", "b"]),
        Shape::List(Element::Scalar(_)) => Value::from(vec![1, 2]),
        Shape::List(Element::Record(schema)) => {
            Value::List(vec![Value::Record(Record::empty(schema()))])
        }
    }
}

#[test]
fn test_nested_codec_settings_projection() {
    let description = AudioDescription::new().with_name("eng").with_codec_settings(
        AudioCodecSettings::new().with_aac_settings(
            AacSettings::new()
                .with_bitrate(128000)
                .with_coding_mode("CODING_MODE_2_0"),
        ),
    );

    assert_eq!(
        serde_json::to_value(description.to_canonical()).unwrap(),
        json!({
            "name": "eng",
            "codecSettings": {
                "aacSettings": { "bitrate": 128000, "codingMode": "CODING_MODE_2_0" }
            }
        })
    );
}

#[test]
fn test_unknown_field_names_the_field() {
    let err = AacSettings::try_from_bindings([
        ("bitrate", Value::from(96000)),
        ("bogusField", Value::from(1)),
    ])
    .unwrap_err();

    match err {
        ShapeError::UnknownField { record, field } => {
            assert_eq!(record, "AacSettings");
            assert_eq!(field, "bogusField");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_equality_depends_on_kind() {
    assert_eq!(
        AacSettings::new().with_bitrate(96000),
        AacSettings::new().with_bitrate(96000)
    );
    assert_ne!(
        AacSettings::new().with_bitrate(96000).as_record(),
        Ac3Settings::new().with_bitrate(96000).as_record()
    );
    assert_eq!(
        AacSettings::new().with_bitrate(96000),
        AacSettings::new().with_bitrate(96000.0)
    );
}

#[test]
fn test_numeric_equality_keeps_projection() {
    let integer = AacSettings::try_from_bindings([("bitrate", Value::from(96000))]).unwrap();
    let float = AacSettings::try_from_bindings([("bitrate", Value::from(96000.0))]).unwrap();
    assert_eq!(integer, float);
    assert_eq!(integer.to_canonical(), float.to_canonical());
    assert_eq!(map_to_json(&integer.to_canonical())["bitrate"], json!(96000));

    let unknown = AacSettings::new().with_bitrate(f64::NAN);
    assert_eq!(unknown, unknown.clone());
}

#[test]
fn test_destination_list_order() {
    let props = ChannelProps::new().with_destinations(vec![
        OutputDestination::new().with_id("d1"),
        OutputDestination::new()
            .with_id("d2")
            .with_settings(vec![OutputDestinationSettings::new().with_url("rtmp://x")]),
    ]);

    let projected = props.to_canonical();
    let destinations = projected["destinations"].as_list().unwrap();
    assert_eq!(destinations.len(), 2);
    assert_eq!(
        serde_json::to_value(&destinations[0]).unwrap(),
        json!({ "id": "d1" })
    );
    let settings = destinations[1].as_map().unwrap()["settings"].as_list().unwrap();
    assert_eq!(settings.len(), 1);
    assert_eq!(
        serde_json::to_value(&settings[0]).unwrap(),
        json!({ "url": "rtmp://x" })
    );
}

#[test]
fn test_input_type_uses_type_wire_name() {
    let props = InputProps::new()
        .with_name("camera")
        .with_input_type("URL_PULL")
        .with_sources(vec![InputSourceRequest::new().with_url("https://origin/live.m3u8")]);

    assert_eq!(
        serde_json::to_value(props.to_canonical()).unwrap(),
        json!({
            "name": "camera",
            "sources": [{ "url": "https://origin/live.m3u8" }],
            "type": "URL_PULL"
        })
    );
    assert_eq!(props.input_type(), Some(&Value::from("URL_PULL")));
    assert_eq!(
        InputProps::try_from_bindings([("type", Value::from("RTMP_PUSH"))])
            .unwrap()
            .input_type(),
        Some(&Value::from("RTMP_PUSH"))
    );
}

#[test]
fn test_input_role_arn_deferred() {
    let marker = Deferred::new(Intrinsic::get_att("MediaLiveRole", "Arn"));
    let props = InputProps::new().with_role_arn(marker.clone());

    let projected = props.to_canonical();
    assert!(Deferred::ptr_eq(
        projected["roleArn"].as_deferred().unwrap(),
        &marker
    ));
}

#[test]
fn test_container_settings_variants() {
    let raw = ArchiveContainerSettings::new().with_raw_settings(RawSettings::new());
    let m2ts = ArchiveContainerSettings::new()
        .with_m2ts_settings(M2tsSettings::new().with_audio_pids("482-498"));

    assert_eq!(
        serde_json::to_value(raw.to_canonical()).unwrap(),
        json!({ "rawSettings": {} })
    );
    assert_eq!(
        serde_json::to_value(m2ts.to_canonical()).unwrap(),
        json!({ "m2tsSettings": { "audioPids": "482-498" } })
    );
    assert_ne!(raw, m2ts);
}

#[test]
fn test_video_description_debug() {
    let video = VideoDescription::new()
        .with_name("video_720p")
        .with_width(1280)
        .with_height(720)
        .with_codec_settings(
            VideoCodecSettings::new().with_h264_settings(H264Settings::new().with_bitrate(3000000)),
        );

    assert_eq!(
        format!("{:?}", video),
        "VideoDescription(codec_settings=VideoCodecSettings(h264_settings=H264Settings(bitrate=3000000)), height=720, name=\"video_720p\", width=1280)"
    );
}

#[test]
fn test_security_group_rules() {
    let props = InputSecurityGroupProps::new().with_whitelist_rules(vec![
        InputWhitelistRuleCidr::new().with_cidr("10.0.0.0/16"),
        InputWhitelistRuleCidr::new().with_cidr("192.168.1.0/24"),
    ]);

    assert_eq!(
        serde_json::to_value(props.to_canonical()).unwrap(),
        json!({ "whitelistRules": [{ "cidr": "10.0.0.0/16" }, { "cidr": "192.168.1.0/24" }] })
    );
}

#[test]
fn test_encoder_settings_from_document() {
    let document = json!({
        "audioDescriptions": [{
            "audioSelectorName": "default",
            "name": "audio_1",
            "codecSettings": { "aacSettings": { "bitrate": 192000, "sampleRate": 48000 } }
        }],
        "videoDescriptions": [{ "name": "video_1", "width": 1920, "height": 1080 }],
        "outputGroups": [{
            "name": "archive",
            "outputGroupSettings": {
                "archiveGroupSettings": { "destination": { "destinationRefId": "archive" } }
            },
            "outputs": [{
                "audioDescriptionNames": ["audio_1"],
                "videoDescriptionName": "video_1",
                "outputSettings": {
                    "archiveOutputSettings": {
                        "nameModifier": "_1",
                        "containerSettings": { "m2tsSettings": {} }
                    }
                }
            }]
        }],
        "timecodeConfig": { "source": "SYSTEMCLOCK" }
    });

    let settings = EncoderSettings::from_document(&document).unwrap();
    assert_eq!(
        serde_json::to_value(settings.to_canonical()).unwrap(),
        document
    );

    let bad = json!({ "videoDescriptions": [{ "name": "v", "width": "wide" }] });
    assert!(EncoderSettings::from_document(&bad).unwrap_err().is_structural_violation());
}

#[test]
fn test_round_trip_every_field() {
    for schema in all_schemas() {
        for field in schema.fields {
            let value = legal_value(&field.shape);
            let record = Record::from_bindings(schema, [(field.name, value.clone())])
                .unwrap_or_else(|e| panic!("{}.{}: {e}", schema.name, field.name));

            assert_eq!(record.get(field.name), Some(&value));
            assert_eq!(record.to_canonical().len(), 1);
            assert!(record.to_canonical().contains_key(field.wire));
        }
    }
}

#[test]
fn test_every_field_accepts_deferred() {
    let marker = Deferred::new(Intrinsic::reference("Parameter"));
    for schema in all_schemas() {
        for field in schema.fields {
            let record =
                Record::from_bindings(schema, [(field.wire, Value::Deferred(marker.clone()))])
                    .unwrap();
            assert!(record.get(field.name).unwrap().is_deferred());
        }
    }
}

#[test]
fn test_root_props_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ChannelProps>();
    assert_send_sync::<InputProps>();
    assert_send_sync::<InputSecurityGroupProps>();
    assert_send_sync::<Deferred>();
}
