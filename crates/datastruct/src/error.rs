//! Error types for DataStruct
//!
//! Provides error handling for:
//! - Type definition (invalid or duplicate property names)
//! - Construction and bulk update (argument count, invalid properties)
//! - Generic key access and named accessor dispatch
//! - Delegated text encoding/decoding

/// Main DataStruct error type
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// More positional values than declared properties
    #[error("too many arguments: given {given}, expected at most {max}")]
    ArgumentCount { given: usize, max: usize },

    /// Named value (construction/update) uses an undeclared key
    #[error("invalid property: {0}")]
    InvalidProperty(String),

    /// Generic get/set uses an undeclared key
    #[error("property not defined: {0}")]
    KeyNotRecognized(String),

    /// Named accessor or extension method does not exist
    #[error("undefined method '{method}' for {type_name}")]
    MethodNotUnderstood { type_name: String, method: String },

    /// Accessor invoked with the wrong number of arguments
    #[error("wrong number of arguments for '{method}': given {given}, expected {expected}")]
    WrongArity {
        method: String,
        given: usize,
        expected: usize,
    },

    /// Record wrapped as a compile-time type it was not created from
    #[error("type mismatch: expected a {expected} record, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Schema set has no type with this name
    #[error("unknown record type: {0}")]
    UnknownType(String),

    /// Property declared twice at definition time
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),

    /// Property name is not a valid identifier
    #[error("invalid property name: '{0}' (must be alphanumeric or underscore, not starting with a digit)")]
    InvalidPropertyName(String),

    /// Unknown interchange text format
    #[error("unknown text format: {0}")]
    UnknownFormat(String),

    /// Decoded text is not a key-value mapping
    #[error("expected a mapping, got {0}")]
    NotAMapping(&'static str),

    /// Raised by user-supplied extension methods
    #[error("extension error: {0}")]
    Extension(String),

    /// JSON encoder/decoder failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoder/decoder failure
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RecordError {
    /// Create method-not-understood error
    pub fn method_not_understood(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MethodNotUnderstood {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    /// Create type-mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create extension error (for use inside extension methods)
    pub fn extension(message: impl Into<String>) -> Self {
        Self::Extension(message.into())
    }

    /// Classify the error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            Self::WrongArity { .. } => ErrorKind::WrongArity,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidProperty(_) => ErrorKind::InvalidProperty,
            Self::KeyNotRecognized(_) => ErrorKind::KeyNotRecognized,
            Self::MethodNotUnderstood { .. } => ErrorKind::MethodNotUnderstood,
            Self::DuplicateProperty(_) | Self::InvalidPropertyName(_) | Self::UnknownType(_) => {
                ErrorKind::Definition
            }
            Self::UnknownFormat(_) | Self::NotAMapping(_) | Self::Json(_) | Self::Yaml(_) => {
                ErrorKind::Encoding
            }
            Self::Extension(_) => ErrorKind::Extension,
        }
    }

    /// Usage errors are never transient
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Too many positional values in construction/update
    ArgumentCount,
    /// Accessor or method called with the wrong number of arguments
    WrongArity,
    /// Undeclared key in construction/update
    InvalidProperty,
    /// Undeclared key in generic get/set
    KeyNotRecognized,
    /// Undeclared accessor or method name
    MethodNotUnderstood,
    /// Record belongs to a different type
    TypeMismatch,
    /// Bad property list or unknown type name
    Definition,
    /// Text format or encoder failure
    Encoding,
    /// Failure raised by an extension method
    Extension,
}

/// Result type for DataStruct operations
pub type Result<T> = std::result::Result<T, RecordError>;
