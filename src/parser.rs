//! Raw entity normalization.
//!
//! [`parse`] turns a [`RawEntity`] into a [`ModelDefinition`]: fields get
//! resolved scalar types and precomputed validation rules, relationship
//! edges are classified and named. Entities parse independently; the only
//! hard failure is an invalid model (empty name or no fields), which
//! halts generation for that entity without affecting others.

use indexmap::IndexMap;

use crate::config::GenerationConfig;
use crate::model::{FieldDefinition, ModelDefinition, ModelError, RawEntity};
use crate::naming::{pluralize, to_pascal_case, to_snake_case};
use crate::relationship;
use crate::typemap::{map_annotations, ScalarType};

/// Check whether a raw entity can be parsed at all.
///
/// `parse` succeeds exactly when this holds.
pub fn validate(raw: &RawEntity) -> bool {
    !raw.name.trim().is_empty() && !raw.fields.is_empty()
}

/// Normalize a raw entity into a [`ModelDefinition`].
///
/// Fields named `id` (any casing) are excluded; the identity field is
/// handled implicitly by the entity templates. Unknown type tags resolve
/// to the string default with a warning. Duplicate field names keep the
/// first occurrence.
///
/// # Example
///
/// ```ignore
/// use modelgen::{parser, GenerationConfig, RawEntity};
///
/// let raw: RawEntity = serde_yaml::from_str(yaml)?;
/// let model = parser::parse(&raw, &GenerationConfig::default())?;
/// ```
pub fn parse(raw: &RawEntity, config: &GenerationConfig) -> Result<ModelDefinition, ModelError> {
    if raw.name.trim().is_empty() {
        return Err(ModelError::InvalidModel {
            entity: raw.name.clone(),
            reason: "entity name is empty".to_string(),
        });
    }
    if raw.fields.is_empty() {
        return Err(ModelError::InvalidModel {
            entity: raw.name.clone(),
            reason: "entity has no fields".to_string(),
        });
    }

    let mut fields: IndexMap<String, FieldDefinition> = IndexMap::new();
    for field in &raw.fields {
        if field.name.eq_ignore_ascii_case("id") {
            continue;
        }
        if fields.contains_key(&field.name) {
            tracing::warn!(
                "Duplicate field '{}' in entity '{}', keeping first definition",
                field.name,
                raw.name
            );
            continue;
        }
        if ScalarType::parse(&field.field_type).is_none() {
            tracing::warn!(
                "Unmapped type '{}' on field '{}.{}', falling back to string",
                field.field_type,
                raw.name,
                field.name
            );
        }
        let rules = map_annotations(
            &field.name,
            &field.field_type,
            field.nullable,
            config.default_string_length,
        );
        fields.insert(
            field.name.clone(),
            FieldDefinition {
                name: field.name.clone(),
                source_type: ScalarType::resolve(&field.field_type),
                raw_type: field.field_type.clone(),
                nullable: field.nullable,
                rules,
            },
        );
    }

    let mut relationships = Vec::with_capacity(raw.relationships.len());
    for edge in &raw.relationships {
        let descriptor = if config.strict_relationships {
            relationship::resolve_checked(
                &raw.name,
                &edge.target,
                &edge.source_multiplicity,
                &edge.target_multiplicity,
            )?
        } else {
            relationship::resolve(
                &raw.name,
                &edge.target,
                &edge.source_multiplicity,
                &edge.target_multiplicity,
            )
        };
        relationships.push(descriptor);
    }

    Ok(ModelDefinition {
        entity_name: raw.name.clone(),
        fields: fields.into_values().collect(),
        relationships,
        table_name: pluralize(&to_snake_case(&raw.name)),
        collection_name: pluralize(&to_pascal_case(&raw.name)),
    })
}
