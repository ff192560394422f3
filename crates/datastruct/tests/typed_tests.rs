//! Generated Type Tests
//!
//! Record types declared at compile time with `datastruct!`.

use datastruct::{args, datastruct, DataStruct, ErrorKind, Record, RecordError, TextFormat, Value};
use pretty_assertions::assert_eq;

datastruct! {
    /// Test subject with three properties
    pub struct FooBarBaz { foo, bar, baz }
}

datastruct! {
    #[derive(Default)]
    struct Animal { name, legs }
}

impl Animal {
    fn bark() -> &'static str {
        "dog"
    }

    fn meow(&self) -> &'static str {
        "cat"
    }
}

#[test]
fn test_generated_accessors() {
    let mut subject = FooBarBaz::from_array([12, 34, 56]).unwrap();
    assert_eq!(subject.bar(), &Value::from(34));

    subject.set_baz(78);
    assert_eq!(subject.baz(), &Value::from(78));

    subject.set_foo(Value::Null);
    assert_eq!(subject.foo(), &Value::Null);
}

#[test]
fn test_type_is_built_once() {
    assert!(FooBarBaz::record_type().same_type(FooBarBaz::record_type()));
    assert_eq!(FooBarBaz::record_type().name(), "FooBarBaz");
    assert_eq!(
        FooBarBaz::record_type().property_names(),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn test_impl_block_extensions() {
    assert_eq!(Animal::bark(), "dog");
    assert_eq!(Animal::default().meow(), "cat");
}

#[test]
fn test_default_is_empty() {
    let animal = Animal::default();
    assert_eq!(animal.name(), &Value::Null);
    assert!(animal.to_map().is_empty());
}

#[test]
fn test_shared_behavior() {
    let mut subject = FooBarBaz::construct(args![1; baz => 3]).unwrap();
    assert_eq!(subject.to_vec(), vec![Value::from(1), Value::Null, Value::from(3)]);

    subject.update(args![; bar => 2]).unwrap();
    assert_eq!(subject.get("bar").unwrap(), &Value::from(2));

    assert!(matches!(
        subject.set("quack", 1),
        Err(RecordError::KeyNotRecognized(_))
    ));
    assert!(subject.responds_to("foo="));
    assert!(!subject.responds_to("meow"));
}

#[test]
fn test_from_mapping_errors() {
    assert!(matches!(
        FooBarBaz::from_mapping([("quack", 1)]),
        Err(RecordError::InvalidProperty(_))
    ));
    assert!(matches!(
        FooBarBaz::from_array([1, 2, 3, 4]),
        Err(RecordError::ArgumentCount { given: 4, max: 3 })
    ));
}

#[test]
fn test_display_and_serialize() {
    let subject = FooBarBaz::from_array([12, 34]).unwrap();
    assert_eq!(subject.to_string(), "#<FooBarBaz foo=12 bar=34>");
    assert_eq!(serde_json::to_string(&subject).unwrap(), r#"{"foo":12,"bar":34}"#);
    assert_eq!(subject.to_text(TextFormat::Yaml).unwrap(), "foo: 12\nbar: 34\n");
}

#[test]
fn test_text_round_trip() {
    let subject = FooBarBaz::from_array([1, 2, 3]).unwrap();
    let text = subject.to_text(TextFormat::Json).unwrap();
    assert_eq!(FooBarBaz::from_text(TextFormat::Json, &text).unwrap(), subject);
}

#[test]
fn test_into_record() {
    let subject = FooBarBaz::from_array([1]).unwrap();
    let record: Record = subject.clone().into();
    assert_eq!(&record, subject.as_record());
    assert_eq!(FooBarBaz::from_record(record).unwrap(), subject);
}

#[test]
fn test_from_record_rejects_other_types() {
    let animal = Animal::from_array(["Rex"]).unwrap().into_record();
    let err = FooBarBaz::from_record(animal).unwrap_err();
    assert!(matches!(
        err,
        RecordError::TypeMismatch { ref expected, ref actual }
            if expected == "FooBarBaz" && actual == "Animal"
    ));
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_from_record_rejects_same_shape_runtime_type() {
    // Same properties, but a separately built type
    let lookalike = datastruct(["foo", "bar", "baz"]).unwrap().from_array([1, 2, 3]).unwrap();
    assert!(matches!(
        FooBarBaz::from_record(lookalike),
        Err(RecordError::TypeMismatch { .. })
    ));
}
