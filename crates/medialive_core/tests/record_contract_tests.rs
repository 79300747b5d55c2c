//! Integration tests for the record contract shared by every kind.

use std::sync::Arc;

use medialive_core::{
    Canonical, Deferred, Intrinsic, Number, Record, RecordType, Shape, ShapeError, Value,
};
use serde_json::json;

medialive_core::define_records! {
    namespace = "Test::Service::Thing";
    index = TEST_SCHEMAS;

    Codec {
        bitrate: Double => "bitrate",
        coding_mode: String => "codingMode",
    }

    OtherCodec {
        bitrate: Double => "bitrate",
    }

    Track {
        name: String => "name",
        codec: Codec => "codec",
        enabled: Boolean => "enabled",
        pids: [Integer] => "pids",
    }

    Bundle {
        tracks: [Track] => "tracks",
        labels: [String] => "labels",
        priority: Integer => "priority",
    }

    Container {
        settings: (Codec | OtherCodec) => "settings",
        extras: [Double] => "extras",
    }
}

#[test]
fn test_equal_records_project_equally() {
    let a = Codec::new().with_bitrate(96000).with_coding_mode("CODING_MODE_2_0");
    let b = Codec::new().with_coding_mode("CODING_MODE_2_0").with_bitrate(96000);

    assert_eq!(a, b);
    assert_eq!(a.to_canonical(), b.to_canonical());
}

#[test]
fn test_kinds_with_same_fields_are_not_equal() {
    let a = Codec::new().with_bitrate(96000);
    let b = OtherCodec::new().with_bitrate(96000);

    assert_ne!(a.as_record(), b.as_record());
    assert_eq!(a.to_canonical(), b.to_canonical());
}

#[test]
fn test_absent_fields_are_skipped() {
    let track = Track::new().with_name("eng");

    assert!(track.codec().is_none());
    assert!(track.enabled().is_none());
    assert_eq!(track.to_canonical().len(), 1);
    assert!(!track.to_canonical().contains_key("codec"));
}

#[test]
fn test_projection_is_recursive_and_ordered() {
    let bundle = Bundle::new()
        .with_priority(2)
        .with_labels(vec!["b", "a"])
        .with_tracks(vec![
            Track::new().with_name("first"),
            Track::new()
                .with_name("second")
                .with_codec(Codec::new().with_bitrate(1.5))
                .with_pids(vec![256, 257]),
        ]);

    let projected = serde_json::to_value(bundle.to_canonical()).unwrap();
    assert_eq!(
        projected,
        json!({
            "tracks": [
                { "name": "first" },
                { "name": "second", "codec": { "bitrate": 1.5 }, "pids": [256, 257] }
            ],
            "labels": ["b", "a"],
            "priority": 2
        })
    );

    let keys: Vec<_> = bundle.to_canonical().keys().cloned().collect();
    assert_eq!(keys, vec!["tracks", "labels", "priority"]);
}

#[test]
fn test_projection_is_idempotent() {
    let track = Track::new().with_name("eng").with_enabled(true);
    let first = track.to_canonical();
    let second = track.to_canonical();

    assert_eq!(first, second);
    assert_eq!(track, Track::new().with_name("eng").with_enabled(true));
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Codec::try_from_bindings([("bitrate", Value::from(96000)), ("bogusField", Value::from(1))])
        .unwrap_err();

    assert!(err.is_structural_violation());
    assert_eq!(err.record(), Some("Codec"));
    assert_eq!(err.field(), Some("bogusField"));
    assert!(err.to_string().contains("bogusField"));
}

#[test]
fn test_wrong_nested_kind_is_rejected() {
    let err = Track::try_from_bindings([("codec", Value::from(OtherCodec::new().with_bitrate(1)))])
        .unwrap_err();

    match err {
        ShapeError::WrongType { record, field, expected, .. } => {
            assert_eq!(record, "Track");
            assert_eq!(field, "codec");
            assert_eq!(expected, "Codec");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mixed_list_is_rejected() {
    let err = Bundle::try_from_bindings([(
        "tracks",
        Value::List(vec![Value::from(Track::new()), Value::from("not a track")]),
    )])
    .unwrap_err();

    assert!(matches!(err, ShapeError::WrongElement { index: 1, .. }));
}

#[test]
fn test_integer_field_rejects_floats() {
    let err = Bundle::try_from_bindings([("priority", Value::from(1.5))]).unwrap_err();
    assert!(matches!(err, ShapeError::WrongType { .. }));

    let ok = Codec::try_from_bindings([("bitrate", Value::from(128000))]).unwrap();
    assert_eq!(ok.bitrate(), Some(&Value::Number(Number::Integer(128000))));
}

#[test]
fn test_round_trip_through_accessors() {
    let codec = Codec::new().with_bitrate(64000);
    let track = Track::new()
        .with_codec(codec.clone())
        .with_pids(vec![481])
        .with_enabled(false);

    assert_eq!(track.codec(), Some(&Value::from(codec)));
    assert_eq!(track.pids(), Some(&Value::from(vec![481])));
    assert_eq!(track.enabled(), Some(&Value::from(false)));
}

#[test]
fn test_deferred_marker_is_passed_through() {
    let marker = Deferred::new(Intrinsic::reference("RoleParameter"));
    let track = Track::new().with_name(marker.clone()).with_pids(vec![256]);

    let projected = track.to_canonical();
    let carried = projected["name"].as_deferred().unwrap();
    assert!(Deferred::ptr_eq(carried, &marker));

    let other = Deferred::new(Intrinsic::reference("RoleParameter"));
    assert_ne!(track, Track::new().with_name(other).with_pids(vec![256]));
}

#[test]
fn test_deferred_list_element() {
    let marker = Deferred::from(Arc::new(Intrinsic::get_att("Encoder", "Pid")));
    let bundle = Bundle::try_from_bindings([(
        "labels",
        Value::List(vec![Value::from("main"), Value::Deferred(marker.clone())]),
    )])
    .unwrap();

    let labels = bundle.to_canonical()["labels"].clone();
    let items = labels.as_list().unwrap();
    assert_eq!(items[0], Canonical::String("main".into()));
    assert!(Deferred::ptr_eq(items[1].as_deferred().unwrap(), &marker));
}

#[test]
fn test_union_accepts_any_variant() {
    let with_codec = Record::from_bindings(
        Container::schema(),
        [("settings", Value::from(Codec::new().with_coding_mode("CODING_MODE_1_0")))],
    )
    .unwrap();
    let with_other = Record::from_bindings(
        Container::schema(),
        [("settings", Value::from(OtherCodec::new().with_bitrate(2)))],
    )
    .unwrap();

    assert_ne!(with_codec, with_other);
    assert_eq!(
        serde_json::to_value(with_other.to_canonical()).unwrap(),
        json!({ "settings": { "bitrate": 2 } })
    );

    let err = Record::from_bindings(
        Container::schema(),
        [("settings", Value::from(Track::new()))],
    )
    .unwrap_err();
    match err {
        ShapeError::WrongType { expected, .. } => assert_eq!(expected, "Codec | OtherCodec"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_union_builder_checks_variants() {
    let container = Container::new()
        .with_settings(OtherCodec::new().with_bitrate(2))
        .unwrap();
    assert_eq!(
        container.settings(),
        Some(&Value::from(OtherCodec::new().with_bitrate(2)))
    );

    let marker = Deferred::new(Intrinsic::reference("Settings"));
    let deferred = Container::new().with_settings(marker.clone()).unwrap();
    assert_eq!(deferred.settings(), Some(&Value::Deferred(marker)));

    let err = Container::new().with_settings(Track::new()).unwrap_err();
    assert!(matches!(err, ShapeError::WrongType { field, .. } if field == "settings"));

    match &Container::schema().fields[0].shape {
        Shape::Union(variants) => {
            let names: Vec<_> = variants.iter().map(|variant| variant().name).collect();
            assert_eq!(names, vec!["Codec", "OtherCodec"]);
        }
        _ => panic!("settings is not a union"),
    }
}

#[test]
fn test_records_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Record>();
    assert_send_sync::<Codec>();
    assert_send_sync::<Deferred>();
    assert_send_sync::<Value>();

    let track = Arc::new(Track::new().with_name("main").with_codec(Codec::new().with_bitrate(2)));
    let shared = Arc::clone(&track);
    let projected = std::thread::spawn(move || shared.to_canonical())
        .join()
        .unwrap();
    assert_eq!(projected, track.to_canonical());
}

#[test]
fn test_debug_representation() {
    let codec = Codec::new().with_coding_mode("CODING_MODE_2_0").with_bitrate(96000);
    assert_eq!(
        format!("{:?}", codec),
        "Codec(bitrate=96000, coding_mode=\"CODING_MODE_2_0\")"
    );

    let track = Track::new().with_codec(Codec::new().with_bitrate(0.5)).with_pids(vec![1, 2]);
    assert_eq!(format!("{:?}", track), "Track(codec=Codec(bitrate=0.5), pids=[1, 2])");
    assert_eq!(format!("{:?}", Codec::new()), "Codec()");
}

#[test]
fn test_document_round_trip() {
    let bundle = Bundle::new().with_priority(3).with_tracks(vec![Track::new()
        .with_name("eng")
        .with_codec(Codec::new().with_bitrate(128000))]);

    let json = serde_json::to_string(&bundle.to_canonical()).unwrap();
    let back = Record::from_json_str(Bundle::schema(), &json).unwrap();
    assert_eq!(&back, bundle.as_record());
}

#[test]
fn test_document_intrinsics_and_nulls() {
    let document = json!({
        "name": { "Fn::GetAtt": ["Encoder", "Name"] },
        "enabled": null,
        "pids": [256, { "Ref": "ExtraPid" }]
    });

    let track = Track::from_document(&document).unwrap();
    assert!(track.name().unwrap().is_deferred());
    assert!(track.enabled().is_none());
    assert_eq!(
        medialive_core::map_to_json(&track.to_canonical()),
        json!({
            "name": { "Fn::GetAtt": ["Encoder", "Name"] },
            "pids": [256, { "Ref": "ExtraPid" }]
        })
    );
}

#[test]
fn test_document_rejects_wrong_shapes() {
    let err = Track::from_document(&json!({ "codec": "aac" })).unwrap_err();
    assert!(matches!(err, ShapeError::WrongType { .. }));

    let err = Track::from_document(&json!({ "pids": [1, "two"] })).unwrap_err();
    assert!(matches!(err, ShapeError::WrongElement { index: 1, .. }));

    let err = Track::from_document(&json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidDocument { .. }));

    let err = Track::from_document(&json!({ "coding_mode": "x" })).unwrap_err();
    assert!(matches!(err, ShapeError::UnknownField { .. }));
}

#[test]
fn test_typed_conversion_checks_kind() {
    let record = Codec::new().with_bitrate(1).into_record();
    assert!(Codec::try_from(record.clone()).is_ok());

    let err = OtherCodec::try_from(record).unwrap_err();
    assert!(matches!(err, ShapeError::WrongKind { .. }));
}

#[test]
fn test_schema_index() {
    assert_eq!(TEST_SCHEMAS.len(), 5);
    assert_eq!(Codec::schema().qualified_name, "Test::Service::Thing.Codec");

    let table: Vec<_> = Codec::schema().name_table().collect();
    assert_eq!(table, vec![("bitrate", "bitrate"), ("coding_mode", "codingMode")]);
    assert_eq!(Codec::schema().fields[1].cfn_name(), "CodingMode");
}

#[test]
fn test_render_cfn_uses_pascal_case() {
    let track = Track::new()
        .with_name(Deferred::new(Intrinsic::reference("TrackName")))
        .with_codec(Codec::new().with_coding_mode("CODING_MODE_2_0"));

    assert_eq!(
        serde_json::Value::Object(track.as_record().render_cfn()),
        json!({
            "Name": { "Ref": "TrackName" },
            "Codec": { "CodingMode": "CODING_MODE_2_0" }
        })
    );
}
