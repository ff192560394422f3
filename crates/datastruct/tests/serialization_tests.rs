//! Serialization Tests
//!
//! JSON/YAML output delegated to serde encoders, and parsing back.

use datastruct::{datastruct, RecordError, TextFormat, Value};
use datastruct_test_utils::{foo_bar_baz_record, foo_bar_baz_type, mapping};
use pretty_assertions::assert_eq;

#[test]
fn test_to_json() {
    assert_eq!(
        foo_bar_baz_record().to_json().unwrap(),
        r#"{"foo":12,"bar":34,"baz":56}"#
    );
}

#[test]
fn test_to_pretty_json() {
    let text = foo_bar_baz_record().to_text(TextFormat::JsonPretty).unwrap();
    assert_eq!(text, "{\n  \"foo\": 12,\n  \"bar\": 34,\n  \"baz\": 56\n}");
}

#[test]
fn test_to_yaml() {
    assert_eq!(
        foo_bar_baz_record().to_yaml().unwrap(),
        "foo: 12\nbar: 34\nbaz: 56\n"
    );
}

#[test]
fn test_absent_properties_are_omitted() {
    let record = foo_bar_baz_type().from_array([1]).unwrap();
    assert_eq!(record.to_json().unwrap(), r#"{"foo":1}"#);
}

#[test]
fn test_nested_values() {
    let ty = datastruct(["tags", "meta"]).unwrap();
    let record = ty
        .from_mapping([
            ("tags", Value::from(vec!["a", "b"])),
            ("meta", Value::Map(mapping([("ok", true)]))),
        ])
        .unwrap();

    assert_eq!(
        record.to_json().unwrap(),
        r#"{"tags":["a","b"],"meta":{"ok":true}}"#
    );
    assert_eq!(
        record.to_yaml().unwrap(),
        "tags:\n- a\n- b\nmeta:\n  ok: true\n"
    );
}

#[test]
fn test_serialize_via_serde() {
    let record = foo_bar_baz_record();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"foo": 12, "bar": 34, "baz": 56}));
}

#[test]
fn test_from_yaml_text() {
    let ty = foo_bar_baz_type();
    let record = ty.from_text(TextFormat::Yaml, "foo: 12\nbaz: hello\n").unwrap();
    assert_eq!(
        record.to_vec(),
        vec![Value::from(12), Value::Null, Value::from("hello")]
    );
}

#[test]
fn test_from_text_errors() {
    let ty = foo_bar_baz_type();
    assert!(matches!(
        ty.from_text(TextFormat::Json, "[1, 2]"),
        Err(RecordError::NotAMapping("array"))
    ));
    assert!(matches!(
        ty.from_text(TextFormat::Json, r#"{"quack": 1}"#),
        Err(RecordError::InvalidProperty(_))
    ));
    assert!(matches!(
        ty.from_text(TextFormat::Json, "{"),
        Err(RecordError::Json(_))
    ));
}

#[test]
fn test_format_by_name() {
    let format: TextFormat = "yaml".parse().unwrap();
    assert_eq!(
        foo_bar_baz_record().to_text(format).unwrap(),
        "foo: 12\nbar: 34\nbaz: 56\n"
    );
    assert!(matches!(
        "xml".parse::<TextFormat>(),
        Err(RecordError::UnknownFormat(_))
    ));
}
