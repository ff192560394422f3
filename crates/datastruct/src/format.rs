//! Interchange text formats
//!
//! Records do not encode text themselves: [`encode`] and [`decode`] hand the
//! mapping to `serde_json` or `serde_yaml`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RecordError, Result};
use crate::value::Value;

/// Supported text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// Compact JSON
    Json,

    /// Indented JSON
    JsonPretty,

    /// YAML
    Yaml,
}

impl TextFormat {
    /// Canonical name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
            Self::Yaml => "yaml",
        }
    }
}

impl Display for TextFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormat {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "json-pretty" | "pretty-json" => Ok(Self::JsonPretty),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(RecordError::UnknownFormat(s.to_string())),
        }
    }
}

/// Encode any serializable value
///
/// # Errors
/// Returns the encoder's error if serialization fails
pub fn encode<T: Serialize + ?Sized>(format: TextFormat, value: &T) -> Result<String> {
    let text = match format {
        TextFormat::Json => serde_json::to_string(value)?,
        TextFormat::JsonPretty => serde_json::to_string_pretty(value)?,
        TextFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// Decode text into a [`Value`]
///
/// # Errors
/// Returns the decoder's error if the text is malformed
pub fn decode(format: TextFormat, text: &str) -> Result<Value> {
    let value: Value = match format {
        TextFormat::Json | TextFormat::JsonPretty => serde_json::from_str(text)?,
        TextFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    #[test]
    fn parse_names() {
        assert_eq!("json".parse::<TextFormat>().unwrap(), TextFormat::Json);
        assert_eq!("JSON".parse::<TextFormat>().unwrap(), TextFormat::Json);
        assert_eq!("pretty-json".parse::<TextFormat>().unwrap(), TextFormat::JsonPretty);
        assert_eq!("yml".parse::<TextFormat>().unwrap(), TextFormat::Yaml);
        assert!(matches!(
            "toml".parse::<TextFormat>(),
            Err(RecordError::UnknownFormat(ref f)) if f == "toml"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for format in [TextFormat::Json, TextFormat::JsonPretty, TextFormat::Yaml] {
            assert_eq!(format.to_string().parse::<TextFormat>().unwrap(), format);
        }
    }

    #[test]
    fn encode_mapping() {
        let mut map = Mapping::new();
        map.insert("foo".into(), Value::from(12));
        map.insert("bar".into(), Value::Null);

        assert_eq!(encode(TextFormat::Json, &map).unwrap(), r#"{"foo":12,"bar":null}"#);
        assert_eq!(encode(TextFormat::Yaml, &map).unwrap(), "foo: 12\nbar: null\n");
    }

    #[test]
    fn decode_yaml() {
        let value = decode(TextFormat::Yaml, "foo: 12\nbar: [1, x]\n").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["foo"], Value::from(12));
        assert_eq!(map["bar"], Value::Array(vec![Value::from(1), Value::from("x")]));
    }

    #[test]
    fn decode_floats_exactly() {
        for x in [975_688_524.022_002_f64, 436_040_566.654_736_76, 0.1, -1.0e-300] {
            let text = encode(TextFormat::Json, &Value::Float(x)).unwrap();
            assert_eq!(decode(TextFormat::Json, &text).unwrap(), Value::Float(x));
        }
    }

    #[test]
    fn decode_malformed() {
        assert!(matches!(decode(TextFormat::Json, "{"), Err(RecordError::Json(_))));
        assert!(matches!(decode(TextFormat::Yaml, "a: [b"), Err(RecordError::Yaml(_))));
    }
}
