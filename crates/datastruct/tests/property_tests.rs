//! Property-based Tests
//!
//! Invariants over arbitrary property lists and values.

use datastruct::{datastruct, Arguments, ErrorKind, RecordType, TextFormat, Value};
use datastruct_test_utils::{arb_properties_and_values, arb_property_names, arb_value};
use proptest::prelude::*;

fn build(names: &[String]) -> RecordType {
    datastruct(names).unwrap()
}

proptest! {
    #[test]
    fn prop_positional_fills_in_order((names, values) in arb_properties_and_values()) {
        let ty = build(&names);
        let record = ty.from_array(values.clone()).unwrap();

        let mut expected = values.clone();
        expected.resize(names.len(), Value::Null);
        prop_assert_eq!(record.to_vec(), expected);
    }

    #[test]
    fn prop_named_overrides_positional(
        (names, values) in arb_properties_and_values(),
        override_value in arb_value(),
    ) {
        prop_assume!(!values.is_empty());
        let ty = build(&names);
        let key = names[0].clone();
        let args = values
            .iter()
            .cloned()
            .fold(Arguments::new().with(&key, override_value.clone()), |args, v| args.arg(v));

        let record = ty.instantiate(args).unwrap();
        prop_assert_eq!(record.get(&key).unwrap(), &override_value);
    }

    #[test]
    fn prop_mapping_round_trip((names, values) in arb_properties_and_values()) {
        let ty = build(&names);
        let record = ty.from_array(values).unwrap();
        let rebuilt = ty.from_mapping(record.to_map()).unwrap();
        prop_assert_eq!(rebuilt, record);
    }

    #[test]
    fn prop_array_round_trip((names, values) in arb_properties_and_values()) {
        let ty = build(&names);
        let record = ty.from_array(values).unwrap();
        let rebuilt = ty.from_array(record.to_vec()).unwrap();
        prop_assert_eq!(rebuilt, record);
    }

    #[test]
    fn prop_json_round_trip((names, values) in arb_properties_and_values()) {
        let ty = build(&names);
        let record = ty.from_array(values).unwrap();
        let text = record.to_text(TextFormat::Json).unwrap();
        prop_assert_eq!(ty.from_text(TextFormat::Json, &text).unwrap(), record);
    }

    #[test]
    fn prop_too_many_positional_always_fails(names in arb_property_names(6), extra in 1..4usize) {
        let ty = build(&names);
        let values = vec![Value::Null; names.len() + extra];
        let err = ty.from_array(values).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn prop_unknown_key_fails_every_entry_point(names in arb_property_names(6)) {
        // Uppercase never collides with the lowercase generated names
        let unknown = "UNKNOWN";
        let ty = build(&names);
        let mut record = ty.empty();

        prop_assert_eq!(record.get(unknown).unwrap_err().kind(), ErrorKind::KeyNotRecognized);
        prop_assert_eq!(record.set(unknown, 1).unwrap_err().kind(), ErrorKind::KeyNotRecognized);
        prop_assert_eq!(
            ty.from_mapping([(unknown, 1)]).unwrap_err().kind(),
            ErrorKind::InvalidProperty
        );
        prop_assert_eq!(
            record.update(Arguments::new().with(unknown, 1)).unwrap_err().kind(),
            ErrorKind::InvalidProperty
        );
        prop_assert_eq!(
            record.call(unknown, &[]).unwrap_err().kind(),
            ErrorKind::MethodNotUnderstood
        );
        prop_assert!(record.to_map().is_empty());
    }

    #[test]
    fn prop_responds_to_exactly_declared(names in arb_property_names(6), name in "[a-z][a-z0-9_]{0,7}") {
        let ty = build(&names);
        let record = ty.empty();
        let declared = names.contains(&name);

        prop_assert_eq!(record.responds_to(&name), declared);
        prop_assert_eq!(record.responds_to(&format!("{name}=")), declared);
    }
}
