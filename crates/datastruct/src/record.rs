//! Record instances
//!
//! Provides [`Record`], an instance of a [`RecordType`]: construction and
//! validation, generic key access, named accessor dispatch, bulk update,
//! conversion and serialization.
//!
//! # Access paths
//!
//! Generic access ([`Record::get`], [`Record::set`]) reports undeclared keys as
//! [`RecordError::KeyNotRecognized`]. Named accessors ([`Record::call`] with
//! `foo` / `foo=`) report unknown names as [`RecordError::MethodNotUnderstood`].
//! Construction and [`Record::update`] report undeclared keys as
//! [`RecordError::InvalidProperty`].

use std::fmt::{self, Debug, Display, Formatter};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::arguments::Arguments;
use crate::error::{RecordError, Result};
use crate::format::{self, TextFormat};
use crate::property::{getter, Property};
use crate::record_type::{Member, RecordType};
use crate::value::{Mapping, Value, NULL};

/// Instance of a [`RecordType`]
///
/// Holds values only for properties that were assigned; every other declared
/// property reads as [`Value::Null`].
#[derive(Clone)]
pub struct Record {
    record_type: RecordType,
    values: IndexMap<Property, Value>,
}

impl Record {
    pub(crate) fn blank(record_type: RecordType) -> Self {
        Self {
            record_type,
            values: IndexMap::new(),
        }
    }

    pub(crate) fn construct(record_type: RecordType, args: Arguments) -> Result<Self> {
        let mut record = Self::blank(record_type);
        record.apply(args)?;
        tracing::trace!("Constructed {}", record);
        Ok(record)
    }

    /// The type this record belongs to
    #[inline]
    #[must_use]
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Get a property value by key
    ///
    /// Returns [`Value::Null`] for a declared property that was never assigned.
    ///
    /// # Errors
    /// Returns [`RecordError::KeyNotRecognized`] if `key` is not declared
    pub fn get(&self, key: impl AsRef<str>) -> Result<&Value> {
        let key = key.as_ref();
        if !self.record_type.contains(key) {
            return Err(RecordError::KeyNotRecognized(key.to_string()));
        }
        Ok(self.values.get(key).unwrap_or(&NULL))
    }

    /// Set a property value by key
    ///
    /// # Errors
    /// Returns [`RecordError::KeyNotRecognized`] if `key` is not declared
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let key = key.as_ref();
        let property = self
            .record_type
            .resolve(key)
            .cloned()
            .ok_or_else(|| RecordError::KeyNotRecognized(key.to_string()))?;
        self.values.insert(property, value.into());
        Ok(())
    }

    /// Return a property to the absent state, yielding its previous value
    ///
    /// # Errors
    /// Returns [`RecordError::KeyNotRecognized`] if `key` is not declared
    pub fn unset(&mut self, key: impl AsRef<str>) -> Result<Option<Value>> {
        let key = key.as_ref();
        if !self.record_type.contains(key) {
            return Err(RecordError::KeyNotRecognized(key.to_string()));
        }
        Ok(self.values.shift_remove(key))
    }

    /// Check if a property has been assigned (even if to `Null`)
    #[inline]
    #[must_use]
    pub fn is_set(&self, key: impl AsRef<str>) -> bool {
        self.values.contains_key(key.as_ref())
    }

    /// Invoke a named accessor or extension method
    ///
    /// `foo` reads property `foo`, `foo=` assigns its single argument and
    /// returns it. Extension methods receive the arguments as given.
    ///
    /// # Errors
    /// - [`RecordError::MethodNotUnderstood`] if no such accessor or method exists
    /// - [`RecordError::WrongArity`] if an accessor gets the wrong number of arguments
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let member = self
            .record_type
            .member(name)
            .cloned()
            .ok_or_else(|| RecordError::method_not_understood(self.record_type.name(), name))?;

        match member {
            Member::Getter(index) => {
                check_arity(name, args, 0)?;
                Ok(self.value_at(index).clone())
            }
            Member::Setter(index) => {
                check_arity(name, args, 1)?;
                let value = args[0].clone();
                self.assign_at(index, value.clone());
                Ok(value)
            }
            Member::Method(method) => method(self, args),
        }
    }

    /// Check if `name` would be honored as a property accessor
    ///
    /// True iff the getter-shaped form of `name` is a declared property.
    /// Extension methods do not count.
    #[inline]
    #[must_use]
    pub fn responds_to(&self, name: &str) -> bool {
        self.record_type.contains(getter(name))
    }

    /// Assign positional and named values in place
    ///
    /// All keys are validated before anything is assigned, so a failed update
    /// leaves the record unchanged.
    ///
    /// # Errors
    /// - [`RecordError::ArgumentCount`] if there are more positional values than properties
    /// - [`RecordError::InvalidProperty`] if a named value uses an undeclared key
    pub fn update(&mut self, args: Arguments) -> Result<()> {
        self.apply(args)?;
        tracing::trace!("Updated {}", self);
        Ok(())
    }

    /// Values in declaration order, absent properties as `Null`
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.record_type
            .properties()
            .map(|p| self.values.get(p).cloned().unwrap_or_default())
            .collect()
    }

    /// Independent copy of the assigned key-value pairs
    #[must_use]
    pub fn to_map(&self) -> Mapping {
        self.values
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Iterate over assigned key-value pairs
    #[inline]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs(self.values.iter())
    }

    /// Encode the assigned key-value pairs as text
    ///
    /// # Errors
    /// Returns the encoder's error if serialization fails
    pub fn to_text(&self, format: TextFormat) -> Result<String> {
        format::encode(format, &self.values)
    }

    /// Encode as compact JSON
    ///
    /// # Errors
    /// Returns the encoder's error if serialization fails
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        self.to_text(TextFormat::Json)
    }

    /// Encode as YAML
    ///
    /// # Errors
    /// Returns the encoder's error if serialization fails
    #[inline]
    pub fn to_yaml(&self) -> Result<String> {
        self.to_text(TextFormat::Yaml)
    }

    fn apply(&mut self, args: Arguments) -> Result<()> {
        let (positional, named) = args.into_parts();

        let max = self.record_type.len();
        if positional.len() > max {
            return Err(RecordError::ArgumentCount {
                given: positional.len(),
                max,
            });
        }

        let mut staged: IndexMap<Property, Value> = self
            .record_type
            .properties()
            .cloned()
            .zip(positional)
            .collect();

        for (key, value) in named {
            let property = self
                .record_type
                .resolve(&key)
                .cloned()
                .ok_or(RecordError::InvalidProperty(key))?;
            staged.insert(property, value);
        }

        self.values.extend(staged);
        Ok(())
    }

    fn value_at(&self, index: usize) -> &Value {
        self.record_type
            .property_at(index)
            .and_then(|p| self.values.get(p))
            .unwrap_or(&NULL)
    }

    fn assign_at(&mut self, index: usize, value: Value) {
        if let Some(property) = self.record_type.property_at(index).cloned() {
            self.values.insert(property, value);
        }
    }
}

fn check_arity(name: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RecordError::WrongArity {
            method: name.to_string(),
            given: args.len(),
            expected,
        })
    }
}

/// Iterator over a record's assigned key-value pairs
#[derive(Debug, Clone)]
pub struct Pairs<'a>(indexmap::map::Iter<'a, Property, Value>);

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Pairs<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, &'a Value);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Records are equal when they share a type and every declared property
/// reads the same; an absent property equals one assigned `Null`.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.record_type.same_type(&other.record_type)
            && self.record_type.properties().all(|p| {
                self.values.get(p).unwrap_or(&NULL) == other.values.get(p).unwrap_or(&NULL)
            })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Inspect form: `#<Point foo=12 bar="x">`
impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}", self.record_type.name())?;
        for (key, value) in &self.values {
            write!(f, " {key}={value}")?;
        }
        f.write_str(">")
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.record_type.name());
        for (key, value) in &self.values {
            debug.field(key.as_str(), value);
        }
        debug.finish()
    }
}
