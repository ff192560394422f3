//! Property values
//!
//! Provides [`Value`], the closed set of value kinds a record property can hold.
//! Every kind has a well-defined equality and a serde representation, so any
//! serde encoder can render a record's mapping.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Ordered key-value mapping of property values
pub type Mapping = IndexMap<String, Value>;

/// Value returned for properties that were never assigned
pub static NULL: Value = Value::Null;

/// A property value
///
/// `Null` doubles as the absent value: reading a declared property that was
/// never assigned yields `Null`.
///
/// Equality is reflexive: two `Float`s are equal when they compare equal or
/// are both NaN.
///
/// Integers are stored as `i64`. A decoded integer outside that range (for
/// example a JSON `18446744073709551615`) becomes the nearest `Float`, which
/// loses precision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / null
    #[default]
    Null,

    /// Boolean
    Bool(bool),

    /// Signed integer
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// UTF-8 text
    String(String),

    /// Ordered sequence
    Array(Vec<Value>),

    /// Nested mapping
    Map(Mapping),
}

impl Value {
    /// Check for the null/absent value
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get boolean (if `Bool`)
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get integer (if `Integer`)
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get number as float (`Integer` is widened)
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get text (if `String`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get sequence (if `Array`)
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get mapping (if `Map`)
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the value kind, for diagnostics
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

/// Compact debug form, as used in record inspection
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(value: Mapping) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            // Out-of-range integers widen to f64
            JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(f)) => Self::Float(f),
                (None, None) => Self::Null,
            },
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            JsonValue::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
        assert!(NULL.is_null());
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(12), Value::Integer(12));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("cat"), Value::String("cat".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(3).as_i64(), Some(3));
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from("x").as_i64(), None);
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn display_debug_form() {
        let mut map = Mapping::new();
        map.insert("k".into(), Value::from(1));
        let value = Value::Array(vec![
            Value::Null,
            Value::from(true),
            Value::from(2.5),
            Value::from("hi"),
            Value::Map(map),
        ]);
        assert_eq!(value.to_string(), r#"[null, true, 2.5, "hi", {"k": 1}]"#);
    }

    #[test]
    fn from_json_value() {
        let value = Value::from(json!({"a": 1, "b": [true, null], "c": 0.5}));
        let map = value.as_map().unwrap();
        assert_eq!(map["a"], Value::Integer(1));
        assert_eq!(map["b"], Value::Array(vec![Value::Bool(true), Value::Null]));
        assert_eq!(map["c"], Value::Float(0.5));
    }

    #[test]
    fn nan_equals_itself() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(Value::Array(vec![nan.clone()]), Value::Array(vec![nan.clone()]));
        assert_ne!(nan, Value::Float(0.0));
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Integer(1), Value::Float(1.0));
    }

    #[test]
    fn integers_beyond_i64_widen_to_float() {
        let value = Value::from(json!(u64::MAX));
        assert!(matches!(value, Value::Float(f) if f == 1.844_674_407_370_955_2e19));

        let decoded: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(decoded, Value::Float(f) if f == 1.844_674_407_370_955_2e19));
        assert_eq!(Value::from(json!(i64::MIN)), Value::Integer(i64::MIN));
    }

    #[test]
    fn serde_untagged_round_trip() {
        let text = r#"{"n":null,"i":7,"f":1.25,"s":"x","a":[1],"m":{"z":false}}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value.as_map().unwrap()["i"], Value::Integer(7));
        assert_eq!(value.as_map().unwrap()["f"], Value::Float(1.25));
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }
}
