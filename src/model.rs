//! Raw model input types and normalized model definitions.
//!
//! Raw types mirror the YAML structure an external modeling tool produces
//! (entity name, typed fields, relationship edges). Normalized types are
//! what template renderers consume: resolved scalar types, precomputed
//! validation rules, derived naming. A normalized definition is built once
//! and immutable afterward; cross-entity references stay name-only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::relationship::RelationshipDescriptor;
use crate::typemap::{ScalarType, ValidationRule};

fn default_source_multiplicity() -> String {
    "1".to_string()
}

fn default_target_multiplicity() -> String {
    "*".to_string()
}

/// Wrapper for model YAML structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelSpec {
    pub model: RawEntity,
}

/// Raw field as supplied by the modeling tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    pub name: String,
    /// Type tag from the abstract vocabulary (e.g. "string", "decimal")
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

/// Raw relationship edge attached to an entity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawRelationship {
    /// Target entity name (resolved later against a registry)
    pub target: String,
    #[serde(default = "default_source_multiplicity")]
    pub source_multiplicity: String,
    #[serde(default = "default_target_multiplicity")]
    pub target_multiplicity: String,
    #[serde(default)]
    pub doc: Option<String>,
}

/// Raw entity description from YAML.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawEntity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
    #[serde(default)]
    pub doc: Option<String>,
}

/// Normalized field with resolved type and precomputed validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub source_type: ScalarType,
    /// Original type tag, kept for diagnostics
    pub raw_type: String,
    pub nullable: bool,
    pub rules: Vec<ValidationRule>,
}

/// Normalized entity definition consumed by template renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDefinition {
    pub entity_name: String,
    /// Ordered, name-unique fields (identity field excluded)
    pub fields: Vec<FieldDefinition>,
    pub relationships: Vec<RelationshipDescriptor>,
    /// Pluralized snake_case name, e.g. "order_items"
    pub table_name: String,
    /// Pluralized PascalCase name, e.g. "OrderItems"
    pub collection_name: String,
}

impl ModelDefinition {
    /// Serialize the definition to JSON for external renderers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Error type for model loading and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The raw entity fails validation (empty name or no fields)
    InvalidModel {
        entity: String,
        reason: String,
    },
    /// A multiplicity pair outside the classification table, in strict mode
    AmbiguousRelationship {
        source_entity: String,
        target_entity: String,
        source_multiplicity: String,
        target_multiplicity: String,
    },
    Io {
        path: String,
        message: String,
    },
    Yaml {
        path: String,
        message: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidModel { entity, reason } => {
                write!(f, "Invalid model '{}': {}", entity, reason)
            }
            ModelError::AmbiguousRelationship {
                source_entity,
                target_entity,
                source_multiplicity,
                target_multiplicity,
            } => write!(
                f,
                "Ambiguous relationship {} -> {}: multiplicity pair ({}, {}) is not in the classification table",
                source_entity, target_entity, source_multiplicity, target_multiplicity
            ),
            ModelError::Io { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
            ModelError::Yaml { path, message } => {
                write!(f, "Failed to parse {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_entity_from_yaml() {
        let yaml = r#"
model:
  name: Order
  fields:
    - name: total
      type: decimal
    - name: placed_at
      type: datetime
      nullable: true
  relationships:
    - target: Product
      source_multiplicity: "*"
      target_multiplicity: "*"
"#;
        let spec: ModelSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.model.name, "Order");
        assert_eq!(spec.model.fields.len(), 2);
        assert!(!spec.model.fields[0].nullable);
        assert!(spec.model.fields[1].nullable);
        assert_eq!(spec.model.relationships[0].target, "Product");
    }

    #[test]
    fn test_relationship_multiplicity_defaults() {
        let yaml = r#"
target: LineItem
"#;
        let rel: RawRelationship = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rel.source_multiplicity, "1");
        assert_eq!(rel.target_multiplicity, "*");
    }

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidModel {
            entity: "Order".to_string(),
            reason: "no fields".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid model 'Order': no fields");
    }
}
