//! Record type definitions from configuration
//!
//! Provides [`RecordSchema`] and [`SchemaSet`] for declaring record types in
//! YAML or JSON instead of code.
//!
//! ```yaml
//! types:
//!   - name: Point
//!     properties: [x, y]
//!   - name: Tag
//!     properties: [label, label, color]
//!     duplicates: dedupe
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::record_type::{DuplicatePolicy, RecordType};

/// One record type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSchema {
    /// Type name
    pub name: String,

    /// Property names, in order
    pub properties: Vec<String>,

    /// Duplicate property handling
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl RecordSchema {
    /// Create schema with default duplicate handling
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            properties: properties.into_iter().map(Into::into).collect(),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or has unknown fields
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or has unknown fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the record type
    ///
    /// # Errors
    /// See [`RecordTypeBuilder::build`](crate::RecordTypeBuilder::build)
    pub fn build(&self) -> Result<RecordType> {
        RecordType::builder(&self.name)
            .properties(&self.properties)
            .duplicates(self.duplicates)
            .build()
    }
}

/// Several record type definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaSet {
    /// Definitions, in order
    #[serde(default)]
    pub types: Vec<RecordSchema>,
}

impl SchemaSet {
    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or has unknown fields
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or has unknown fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build every type, keyed by name
    ///
    /// A name defined twice keeps the later definition.
    ///
    /// # Errors
    /// Returns the first definition error
    pub fn build(&self) -> Result<IndexMap<String, RecordType>> {
        let mut types = IndexMap::with_capacity(self.types.len());
        for schema in &self.types {
            let record_type = schema.build()?;
            if types.insert(schema.name.clone(), record_type).is_some() {
                tracing::warn!("Record type {} defined more than once", schema.name);
            }
        }
        tracing::debug!("Built {} record types from schema", types.len());
        Ok(types)
    }

    /// Build a single named type
    ///
    /// # Errors
    /// Returns [`RecordError::UnknownType`] if no definition has that name
    pub fn build_one(&self, name: &str) -> Result<RecordType> {
        self.types
            .iter()
            .rev()
            .find(|schema| schema.name == name)
            .ok_or_else(|| RecordError::UnknownType(name.to_string()))?
            .build()
    }
}
