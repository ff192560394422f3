//! Property names
//!
//! Provides [`Property`], a validated identifier naming one slot of a record
//! type, and the helpers that map between getter-shaped (`foo`) and
//! setter-shaped (`foo=`) accessor names.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::RecordError;

/// Suffix marking a setter-shaped accessor name
pub const SETTER_MARKER: char = '=';

/// Declared property name
///
/// Cheap to clone; compares and hashes as its text, so a `&str` key looks up
/// the same entry as the `Property` itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Property(Arc<str>);

impl Property {
    /// Create a validated property name
    ///
    /// # Errors
    /// Returns [`RecordError::InvalidPropertyName`] unless the name is a
    /// non-empty identifier of alphanumerics/underscores not starting with a digit
    pub fn new(name: impl AsRef<str>) -> Result<Self, RecordError> {
        let name = name.as_ref();
        if is_identifier(name) {
            Ok(Self(Arc::from(name)))
        } else {
            Err(RecordError::InvalidPropertyName(name.to_string()))
        }
    }

    /// Get name as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Setter-shaped accessor name (`foo=`)
    #[inline]
    #[must_use]
    pub fn setter_name(&self) -> String {
        setter(&self.0)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Property {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Property {
    type Error = RecordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Property {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Property {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Property {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Check for a setter-shaped name
///
/// # Examples
/// ```
/// # use datastruct::property::is_setter;
/// assert!(!is_setter("foo"));
/// assert!(is_setter("foo="));
/// ```
#[inline]
#[must_use]
pub fn is_setter(name: &str) -> bool {
    name.ends_with(SETTER_MARKER)
}

/// Setter-shaped form of a name
///
/// # Examples
/// ```
/// # use datastruct::property::setter;
/// assert_eq!(setter("foo"), "foo=");
/// ```
#[inline]
#[must_use]
pub fn setter(name: &str) -> String {
    format!("{name}{SETTER_MARKER}")
}

/// Getter-shaped form of a name
///
/// # Examples
/// ```
/// # use datastruct::property::getter;
/// assert_eq!(getter("foo="), "foo");
/// assert_eq!(getter("foo"), "foo");
/// ```
#[inline]
#[must_use]
pub fn getter(name: &str) -> &str {
    name.strip_suffix(SETTER_MARKER).unwrap_or(name)
}
