//! Constructor arguments
//!
//! Provides [`Arguments`], a bundle of positional and named values used for
//! construction and bulk update, and the [`args!`](crate::args) macro.

use indexmap::IndexMap;

use crate::value::Value;

/// Positional and named values for construction/update
///
/// Positional values pair with the first declared properties in order; named
/// values are then overlaid and always win over positional ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl Arguments {
    /// Create empty argument list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from positional values only
    #[must_use]
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: IndexMap::new(),
        }
    }

    /// Create from named values only
    #[must_use]
    pub fn named<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        Self {
            positional: Vec::new(),
            named: values
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.into()))
                .collect(),
        }
    }

    /// Append a positional value
    #[inline]
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add (or replace) a named value
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.named.insert(key.as_ref().to_string(), value.into());
        self
    }

    /// Positional values
    #[inline]
    #[must_use]
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    /// Named values
    #[inline]
    #[must_use]
    pub fn named_values(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Check if no values were supplied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.positional, self.named)
    }
}

/// Build [`Arguments`] from positional values, then `key => value` pairs
///
/// # Examples
/// ```
/// # use datastruct::args;
/// let args = args![12, 34; baz => 56];
/// assert_eq!(args.positional_values().len(), 2);
/// assert_eq!(args.named_values().len(), 1);
///
/// let named_only = args![; foo => 1, bar => "x"];
/// assert!(named_only.positional_values().is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::new()$(.arg($value))+
    };
    ($($value:expr),* ; $($key:ident => $named:expr),* $(,)?) => {
        $crate::Arguments::new()$(.arg($value))*$(.with(stringify!($key), $named))*
    };
}
