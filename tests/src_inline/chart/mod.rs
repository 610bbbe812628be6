use super::*;

#[test]
fn test_top_level_has_schema_and_skips_empty_fields() {
    let v = serde_json::to_value(Spec::top_level()).unwrap();
    assert_eq!(v["$schema"], VEGA_LITE_SCHEMA);
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 1);
}

#[test]
fn test_field_def_serialization() {
    let def = FieldDef::quantitative("ranges[2]")
        .scale(Scale {
            nice: Some(false),
            zero: None,
        })
        .no_title();
    let v = serde_json::to_value(&def).unwrap();
    assert_eq!(v["field"], "ranges[2]");
    assert_eq!(v["type"], "quantitative");
    assert!(v["title"].is_null());
    assert!(v.as_object().unwrap().contains_key("title"));
    assert_eq!(v["scale"]["nice"], false);
    assert!(!v["scale"].as_object().unwrap().contains_key("zero"));
}

#[test]
fn test_mark_builder() {
    let mark = Mark::new(MarkType::Tick).color("black").size(12.0);
    let v = serde_json::to_value(&mark).unwrap();
    assert_eq!(v["type"], "tick");
    assert_eq!(v["color"], "black");
    assert_eq!(v["size"], 12.0);
    assert!(!v.as_object().unwrap().contains_key("opacity"));
}

#[test]
fn test_header_camel_case() {
    let header = Header {
        label_angle: Some(0.0),
        label_align: Some("left".to_string()),
    };
    let v = serde_json::to_value(&header).unwrap();
    assert_eq!(v["labelAngle"], 0.0);
    assert_eq!(v["labelAlign"], "left");
}

#[test]
fn test_encoding_helper_and_many_channel() {
    let mut enc = encoding([
        ("x", FieldDef::quantitative("a")),
        ("y", FieldDef::quantitative("b")),
    ]);
    enc.insert(
        "tooltip".to_string(),
        Channel::Many(vec![FieldDef::field("t", FieldType::Nominal)]),
    );
    let v = serde_json::to_value(&enc).unwrap();
    assert_eq!(v["x"]["field"], "a");
    assert_eq!(v["y"]["field"], "b");
    assert_eq!(v["tooltip"][0]["type"], "nominal");
}
