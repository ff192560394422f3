//! Record type factory
//!
//! Provides [`RecordType`], a runtime descriptor for a struct-like type with a
//! fixed, ordered set of named properties, and [`RecordTypeBuilder`] to define
//! one.
//!
//! Every build produces a fresh type: two types declared with identical
//! property lists are still distinct. There is no global registry.
//!
//! # Example
//! ```
//! use datastruct::{RecordType, Value};
//!
//! let point = RecordType::define("Point", ["x", "y"], |ext| {
//!     ext.class_method("origin_label", |_ty, _args| Ok(Value::from("origin")));
//!     ext.method("sum", |record, _args| {
//!         let x = record.get("x")?.as_i64().unwrap_or(0);
//!         let y = record.get("y")?.as_i64().unwrap_or(0);
//!         Ok(Value::from(x + y))
//!     });
//! })?;
//!
//! let mut p = point.from_array([3, 4])?;
//! assert_eq!(p.call("sum", &[])?, Value::from(7));
//! assert_eq!(point.call_class_method("origin_label", &[])?, Value::from("origin"));
//! # Ok::<(), datastruct::RecordError>(())
//! ```

use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::arguments::Arguments;
use crate::error::{RecordError, Result};
use crate::format::{self, TextFormat};
use crate::property::Property;
use crate::record::Record;
use crate::value::Value;

/// Instance-level extension method
pub type InstanceMethod = Arc<dyn Fn(&mut Record, &[Value]) -> Result<Value> + Send + Sync>;

/// Type-level extension method
pub type ClassMethod = Arc<dyn Fn(&RecordType, &[Value]) -> Result<Value> + Send + Sync>;

/// Type name used by [`datastruct`] for anonymous types
pub const ANONYMOUS_TYPE_NAME: &str = "DataStruct";

/// Names of the built-in record operations
///
/// Extension methods with these names are accepted but logged, since callers
/// may confuse them with the built-ins.
pub const RESERVED_NAMES: &[&str] = &[
    "get",
    "set",
    "unset",
    "update",
    "call",
    "each",
    "iter",
    "responds_to",
    "to_array",
    "to_vec",
    "to_hash",
    "to_map",
    "to_text",
    "to_json",
    "to_yaml",
];

/// What to do with a property declared more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the definition with [`RecordError::DuplicateProperty`]
    #[default]
    Reject,

    /// Keep the first occurrence and drop the rest
    Dedupe,
}

/// Entry in a type's accessor table
#[derive(Clone)]
pub(crate) enum Member {
    Getter(usize),
    Setter(usize),
    Method(InstanceMethod),
}

/// Additional behavior attached at definition time
///
/// Passed to the closure given to [`RecordTypeBuilder::extend`] and
/// [`RecordType::define`].
#[derive(Default)]
pub struct Extensions {
    methods: Vec<(String, InstanceMethod)>,
    class_methods: Vec<(String, ClassMethod)>,
}

impl Extensions {
    /// Define an instance-level method
    pub fn method<F>(&mut self, name: impl Into<String>, method: F) -> &mut Self
    where
        F: Fn(&mut Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.push((name.into(), Arc::new(method)));
        self
    }

    /// Define a type-level method
    pub fn class_method<F>(&mut self, name: impl Into<String>, method: F) -> &mut Self
    where
        F: Fn(&RecordType, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.class_methods.push((name.into(), Arc::new(method)));
        self
    }
}

/// Builder for [`RecordType`]
pub struct RecordTypeBuilder {
    name: String,
    properties: Vec<String>,
    duplicates: DuplicatePolicy,
    extensions: Extensions,
}

impl RecordTypeBuilder {
    /// Create builder for a type with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            duplicates: DuplicatePolicy::default(),
            extensions: Extensions::default(),
        }
    }

    /// Declare one property
    #[inline]
    #[must_use]
    pub fn property(mut self, name: impl AsRef<str>) -> Self {
        self.properties.push(name.as_ref().to_string());
        self
    }

    /// Declare several properties, in order
    #[must_use]
    pub fn properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.properties
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Set duplicate property policy
    #[inline]
    #[must_use]
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Attach extension methods
    #[must_use]
    pub fn extend(mut self, define: impl FnOnce(&mut Extensions)) -> Self {
        define(&mut self.extensions);
        self
    }

    /// Build the record type
    ///
    /// # Errors
    /// - [`RecordError::InvalidPropertyName`] if a name is not an identifier
    /// - [`RecordError::DuplicateProperty`] if a name repeats under
    ///   [`DuplicatePolicy::Reject`]
    pub fn build(self) -> Result<RecordType> {
        let mut properties = IndexSet::with_capacity(self.properties.len());
        for name in &self.properties {
            let property = Property::new(name)?;
            if !properties.insert(property) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(RecordError::DuplicateProperty(name.clone()));
                    }
                    DuplicatePolicy::Dedupe => {
                        tracing::warn!("Dropping duplicate property {} on {}", name, self.name);
                    }
                }
            }
        }

        let mut members = HashMap::with_capacity(properties.len() * 2);
        for (index, property) in properties.iter().enumerate() {
            members.insert(property.to_string(), Member::Getter(index));
            members.insert(property.setter_name(), Member::Setter(index));
        }

        // Extensions install last: on a name clash the extension wins
        for (name, method) in self.extensions.methods {
            if members.contains_key(&name) || RESERVED_NAMES.contains(&name.as_str()) {
                tracing::warn!("Extension method {} on {} shadows an existing member", name, self.name);
            }
            members.insert(name, Member::Method(method));
        }

        let mut class_methods = HashMap::new();
        for (name, method) in self.extensions.class_methods {
            if class_methods.insert(name.clone(), method).is_some() {
                tracing::warn!("Class method {} on {} redefined", name, self.name);
            }
        }

        tracing::debug!(
            "Defined record type {} with {} properties",
            self.name,
            properties.len()
        );

        Ok(RecordType(Arc::new(TypeInner {
            name: self.name,
            properties,
            members,
            class_methods,
        })))
    }
}

struct TypeInner {
    name: String,
    properties: IndexSet<Property>,
    members: HashMap<String, Member>,
    class_methods: HashMap<String, ClassMethod>,
}

/// Runtime record type
///
/// A cheap-to-clone handle; clones share identity. Instances are created
/// with [`instantiate`](Self::instantiate), [`from_array`](Self::from_array)
/// or [`from_mapping`](Self::from_mapping).
#[derive(Clone)]
pub struct RecordType(Arc<TypeInner>);

impl RecordType {
    /// Start defining a named type
    #[inline]
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder::new(name)
    }

    /// Define a named type with extension methods in one call
    ///
    /// # Errors
    /// See [`RecordTypeBuilder::build`]
    pub fn define<I, S>(
        name: impl Into<String>,
        properties: I,
        extensions: impl FnOnce(&mut Extensions),
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RecordTypeBuilder::new(name)
            .properties(properties)
            .extend(extensions)
            .build()
    }

    /// Type name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared properties, in declaration order
    #[inline]
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> {
        self.0.properties.iter()
    }

    /// Declared property names, in declaration order
    #[must_use]
    pub fn property_names(&self) -> Vec<&str> {
        self.0.properties.iter().map(Property::as_str).collect()
    }

    /// Number of declared properties
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.properties.len()
    }

    /// Check if the type declares no properties
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.properties.is_empty()
    }

    /// Check if `key` names a declared property
    #[inline]
    #[must_use]
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.0.properties.contains(key.as_ref())
    }

    /// Declaration index of a property
    #[inline]
    #[must_use]
    pub fn position(&self, key: impl AsRef<str>) -> Option<usize> {
        self.0.properties.get_index_of(key.as_ref())
    }

    /// Check if an instance-level member (accessor or extension) exists
    #[inline]
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.0.members.contains_key(name)
    }

    /// Check if a type-level method exists
    #[inline]
    #[must_use]
    pub fn has_class_method(&self, name: &str) -> bool {
        self.0.class_methods.contains_key(name)
    }

    /// Check if both handles refer to the same type
    #[inline]
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Invoke a type-level extension method
    ///
    /// # Errors
    /// Returns [`RecordError::MethodNotUnderstood`] if no such method was defined,
    /// or whatever the method itself returns
    pub fn call_class_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        let method = self
            .0
            .class_methods
            .get(name)
            .ok_or_else(|| RecordError::method_not_understood(self.name(), name))?;
        method(self, args)
    }

    /// Create an instance from positional and named values
    ///
    /// # Errors
    /// - [`RecordError::ArgumentCount`] if there are more positional values than properties
    /// - [`RecordError::InvalidProperty`] if a named value uses an undeclared key
    pub fn instantiate(&self, args: Arguments) -> Result<Record> {
        Record::construct(self.clone(), args)
    }

    /// Create an instance with no property assigned
    #[inline]
    #[must_use]
    pub fn empty(&self) -> Record {
        Record::blank(self.clone())
    }

    /// Create an instance from an ordered sequence (positional values only)
    ///
    /// # Errors
    /// Returns [`RecordError::ArgumentCount`] if the sequence is longer than the property list
    pub fn from_array<I, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.instantiate(Arguments::positional(values))
    }

    /// Create an instance from a key-value mapping (named values only)
    ///
    /// # Errors
    /// Returns [`RecordError::InvalidProperty`] on an undeclared key
    pub fn from_mapping<I, K, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.instantiate(Arguments::named(values))
    }

    /// Parse an instance from JSON or YAML text holding a mapping
    ///
    /// # Errors
    /// - Encoder errors if the text does not parse
    /// - [`RecordError::NotAMapping`] if the document is not a mapping
    /// - [`RecordError::InvalidProperty`] on an undeclared key
    pub fn from_text(&self, format: TextFormat, text: &str) -> Result<Record> {
        match format::decode(format, text)? {
            Value::Map(map) => self.from_mapping(map),
            other => Err(RecordError::NotAMapping(other.type_name())),
        }
    }

    pub(crate) fn property_at(&self, index: usize) -> Option<&Property> {
        self.0.properties.get_index(index)
    }

    pub(crate) fn resolve(&self, key: &str) -> Option<&Property> {
        self.0.properties.get(key)
    }

    pub(crate) fn member(&self, name: &str) -> Option<&Member> {
        self.0.members.get(name)
    }
}

/// Define an anonymous record type with no extensions
///
/// # Errors
/// See [`RecordTypeBuilder::build`]
///
/// # Examples
/// ```
/// let ty = datastruct::datastruct(["foo", "bar"])?;
/// assert_eq!(ty.name(), "DataStruct");
/// assert_eq!(ty.property_names(), vec!["foo", "bar"]);
/// # Ok::<(), datastruct::RecordError>(())
/// ```
pub fn datastruct<I, S>(properties: I) -> Result<RecordType>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RecordTypeBuilder::new(ANONYMOUS_TYPE_NAME)
        .properties(properties)
        .build()
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other)
    }
}

impl Eq for RecordType {}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl Debug for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut class_methods: Vec<_> = self.0.class_methods.keys().collect();
        class_methods.sort();
        f.debug_struct("RecordType")
            .field("name", &self.0.name)
            .field("properties", &self.property_names())
            .field("class_methods", &class_methods)
            .finish_non_exhaustive()
    }
}
