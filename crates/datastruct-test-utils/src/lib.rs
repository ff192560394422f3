//! Testing utilities for the DataStruct workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use datastruct::{datastruct, Mapping, Record, RecordType, Value};
use proptest::prelude::*;

pub const FOO_BAR_BAZ: [&str; 3] = ["foo", "bar", "baz"];

pub fn foo_bar_baz_type() -> RecordType {
    datastruct(FOO_BAR_BAZ).unwrap()
}

/// `foo=12 bar=34 baz=56`
pub fn foo_bar_baz_record() -> Record {
    foo_bar_baz_type().from_array([12, 34, 56]).unwrap()
}

pub fn mapping<I, K, V>(pairs: I) -> Mapping
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Scalar values with finite floats (JSON writes NaN as null)
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Scalars plus shallow arrays and maps
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
        ]
    })
}

/// Distinct identifier-shaped property names
pub fn arb_property_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,7}", 1..=max)
        .prop_map(|names| names.into_iter().collect())
}

/// A property list plus a positional value list no longer than it
pub fn arb_properties_and_values() -> impl Strategy<Value = (Vec<String>, Vec<Value>)> {
    arb_property_names(8).prop_flat_map(|names| {
        let len = names.len();
        (Just(names), prop::collection::vec(arb_value(), 0..=len))
    })
}
