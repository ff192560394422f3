//! Compile-time record types
//!
//! [`datastruct!`](crate::datastruct) declares a named struct backed by a
//! [`Record`], with one concrete getter/setter pair per property generated at
//! compile time. Shared behavior comes from the [`DataStruct`] trait.
//!
//! # Example
//! ```
//! use datastruct::{datastruct, DataStruct, Value};
//!
//! datastruct! {
//!     /// A point on the plane
//!     #[derive(Default)]
//!     pub struct Point { x, y }
//! }
//!
//! // Extensions are ordinary impl blocks
//! impl Point {
//!     pub fn origin() -> Self {
//!         Self::default()
//!     }
//! }
//!
//! let mut p = Point::from_array([1, 2])?;
//! assert_eq!(p.x(), &Value::from(1));
//! p.set_y(5);
//! assert_eq!(p.to_vec(), vec![Value::from(1), Value::from(5)]);
//! assert_eq!(p.to_string(), "#<Point x=1 y=5>");
//! assert_eq!(Point::origin().x(), &Value::Null);
//! # Ok::<(), datastruct::RecordError>(())
//! ```

use crate::arguments::Arguments;
use crate::error::Result;
use crate::format::TextFormat;
use crate::record::Record;
use crate::record_type::RecordType;
use crate::value::{Mapping, Value};

/// Shared behavior of record types declared with [`datastruct!`](crate::datastruct)
pub trait DataStruct: Sized {
    /// The runtime type descriptor, built once per declared type
    fn record_type() -> &'static RecordType;

    /// Wrap a record of this type
    ///
    /// # Errors
    /// Returns [`RecordError::TypeMismatch`](crate::RecordError::TypeMismatch) unless the record was created
    /// from [`Self::record_type`]
    fn from_record(record: Record) -> Result<Self>;

    /// Borrow the backing record
    fn as_record(&self) -> &Record;

    /// Mutably borrow the backing record
    ///
    /// Replacing the record with one of another type makes the generated
    /// accessors panic.
    fn as_record_mut(&mut self) -> &mut Record;

    /// Unwrap the backing record
    fn into_record(self) -> Record;

    /// Create from positional and named values
    ///
    /// # Errors
    /// See [`RecordType::instantiate`]
    fn construct(args: Arguments) -> Result<Self> {
        Self::record_type().instantiate(args).and_then(Self::from_record)
    }

    /// Create from an ordered sequence
    ///
    /// # Errors
    /// See [`RecordType::from_array`]
    fn from_array<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::record_type().from_array(values).and_then(Self::from_record)
    }

    /// Create from a key-value mapping
    ///
    /// # Errors
    /// See [`RecordType::from_mapping`]
    fn from_mapping<I, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        Self::record_type().from_mapping(values).and_then(Self::from_record)
    }

    /// Parse from JSON or YAML text
    ///
    /// # Errors
    /// See [`RecordType::from_text`]
    fn from_text(format: TextFormat, text: &str) -> Result<Self> {
        Self::record_type().from_text(format, text).and_then(Self::from_record)
    }

    /// Get a property value by key
    ///
    /// # Errors
    /// See [`Record::get`]
    fn get(&self, key: impl AsRef<str>) -> Result<&Value> {
        self.as_record().get(key)
    }

    /// Set a property value by key
    ///
    /// # Errors
    /// See [`Record::set`]
    fn set(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        self.as_record_mut().set(key, value)
    }

    /// Assign positional and named values in place
    ///
    /// # Errors
    /// See [`Record::update`]
    fn update(&mut self, args: Arguments) -> Result<()> {
        self.as_record_mut().update(args)
    }

    /// Check if `name` would be honored as a property accessor
    fn responds_to(&self, name: &str) -> bool {
        self.as_record().responds_to(name)
    }

    /// Values in declaration order
    fn to_vec(&self) -> Vec<Value> {
        self.as_record().to_vec()
    }

    /// Independent copy of the assigned key-value pairs
    fn to_map(&self) -> Mapping {
        self.as_record().to_map()
    }

    /// Encode the assigned key-value pairs as text
    ///
    /// # Errors
    /// See [`Record::to_text`]
    fn to_text(&self, format: TextFormat) -> Result<String> {
        self.as_record().to_text(format)
    }
}

/// Declare a record type with generated accessors
///
/// For each property `foo` this generates `fn foo(&self) -> &Value` and
/// `fn set_foo(&mut self, value: impl Into<Value>)`. Calling an undeclared
/// accessor is a compile error. The struct implements [`DataStruct`],
/// `Clone`, `PartialEq`, `Debug`, `Display` and `serde::Serialize`; extra
/// `#[derive]`s are limited to ones [`Record`] supports (`Default` is
/// implemented when requested via `#[derive(Default)]`).
///
/// Declaring the same property twice is rejected because the generated
/// accessors would collide.
#[macro_export]
macro_rules! datastruct {
    (
        $(#[doc = $doc:expr])*
        #[derive(Default)]
        $vis:vis struct $name:ident { $($prop:ident),* $(,)? }
    ) => {
        $crate::datastruct! {
            $(#[doc = $doc])*
            $vis struct $name { $($prop),* }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self(<Self as $crate::DataStruct>::record_type().empty())
            }
        }
    };

    (
        $(#[doc = $doc:expr])*
        $vis:vis struct $name:ident { $($prop:ident),* $(,)? }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, PartialEq)]
        $vis struct $name($crate::Record);

        impl $crate::DataStruct for $name {
            fn record_type() -> &'static $crate::RecordType {
                static RECORD_TYPE: ::std::sync::OnceLock<$crate::RecordType> =
                    ::std::sync::OnceLock::new();
                RECORD_TYPE.get_or_init(|| {
                    let properties: &[&str] = &[$(stringify!($prop)),*];
                    $crate::RecordType::builder(stringify!($name))
                        .properties(properties)
                        .build()
                        .expect("identifiers are valid, unique property names")
                })
            }

            fn from_record(record: $crate::Record) -> $crate::Result<Self> {
                let expected = <Self as $crate::DataStruct>::record_type();
                if record.record_type().same_type(expected) {
                    Ok(Self(record))
                } else {
                    Err($crate::RecordError::type_mismatch(
                        expected.name(),
                        record.record_type().name(),
                    ))
                }
            }

            fn as_record(&self) -> &$crate::Record {
                &self.0
            }

            fn as_record_mut(&mut self) -> &mut $crate::Record {
                &mut self.0
            }

            fn into_record(self) -> $crate::Record {
                self.0
            }
        }

        $crate::__paste::paste! {
            impl $name {
                $(
                    #[doc = "Generated property getter"]
                    #[doc = ""]
                    #[doc = "# Panics"]
                    #[doc = "If the backing record was replaced with one of another type"]
                    #[allow(dead_code)]
                    #[must_use]
                    $vis fn $prop(&self) -> &$crate::Value {
                        self.0
                            .get(stringify!($prop))
                            .expect(concat!("record of type ", stringify!($name)))
                    }

                    #[doc = "Generated property setter"]
                    #[doc = ""]
                    #[doc = "# Panics"]
                    #[doc = "If the backing record was replaced with one of another type"]
                    #[allow(dead_code)]
                    $vis fn [<set_ $prop>](&mut self, value: impl ::std::convert::Into<$crate::Value>) {
                        self.0
                            .set(stringify!($prop), value)
                            .expect(concat!("record of type ", stringify!($name)));
                    }
                )*
            }
        }

        impl ::std::convert::From<$name> for $crate::Record {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::convert::AsRef<$crate::Record> for $name {
            fn as_ref(&self) -> &$crate::Record {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::__serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}
