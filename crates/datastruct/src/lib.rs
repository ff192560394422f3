//! DataStruct
//!
//! Lightweight struct-like value objects with a fixed, named, ordered set of
//! properties, defined without writing a dedicated struct for each one.
//!
//! # Core Concepts
//!
//! - [`RecordType`]: Runtime type with an ordered property list, built with
//!   [`RecordType::builder`], [`RecordType::define`] or [`datastruct()`]
//! - [`Record`]: Instance holding values for some or all properties
//! - [`Value`]: Closed set of serializable property values
//! - [`datastruct!`]: Compile-time declaration with generated accessors,
//!   sharing behavior through the [`DataStruct`] trait
//! - [`RecordSchema`]: Type definitions loaded from YAML or JSON
//!
//! # Example
//!
//! ```rust
//! use datastruct::{args, datastruct, TextFormat, Value};
//!
//! let ty = datastruct(["foo", "bar", "baz"])?;
//! let mut record = ty.instantiate(args![12, 34; baz => 56])?;
//!
//! assert_eq!(record.to_vec(), vec![Value::from(12), Value::from(34), Value::from(56)]);
//!
//! record.set("bar", Value::Null)?;
//! assert_eq!(record.to_text(TextFormat::Json)?, r#"{"foo":12,"bar":null,"baz":56}"#);
//! assert!(record.get("quack").is_err());
//! # Ok::<(), datastruct::RecordError>(())
//! ```

#![warn(unreachable_pub)]

pub mod arguments;
pub mod error;
pub mod format;
pub mod property;
pub mod record;
pub mod record_type;
pub mod schema;
pub mod typed;
pub mod value;

// Re-exports
pub use arguments::Arguments;
pub use error::{ErrorKind, RecordError, Result};
pub use format::TextFormat;
pub use property::Property;
pub use record::{Pairs, Record};
pub use record_type::{
    datastruct, ClassMethod, DuplicatePolicy, Extensions, InstanceMethod, RecordType,
    RecordTypeBuilder,
};
pub use schema::{RecordSchema, SchemaSet};
pub use typed::DataStruct;
pub use value::{Mapping, Value};

/// Macro support - used by [`datastruct!`], not part of the public API.
#[doc(hidden)]
pub use paste as __paste;
#[doc(hidden)]
pub use serde as __serde;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
