//! Named registry of parsed model definitions.
//!
//! Relationships reference their target entities by name only; the
//! registry is where those names get resolved at the end of a generation
//! run. Iteration order is insertion order so generated output is stable
//! across runs.

use indexmap::IndexMap;

use crate::model::ModelDefinition;

/// Insertion-ordered collection of model definitions, keyed by entity name.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelDefinition>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from parsed definitions.
    pub fn from_models(models: impl IntoIterator<Item = ModelDefinition>) -> Self {
        let mut registry = Self::new();
        for model in models {
            registry.insert(model);
        }
        registry
    }

    /// Register a definition. Entity names are unique within a generation
    /// run: on collision the first definition wins and the duplicate is
    /// dropped with a warning. Returns whether the model was inserted.
    pub fn insert(&mut self, model: ModelDefinition) -> bool {
        if self.models.contains_key(&model.entity_name) {
            tracing::warn!(
                "Duplicate entity '{}' in generation run, keeping first definition",
                model.entity_name
            );
            return false;
        }
        self.models.insert(model.entity_name.clone(), model);
        true
    }

    pub fn get(&self, entity_name: &str) -> Option<&ModelDefinition> {
        self.models.get(entity_name)
    }

    pub fn contains(&self, entity_name: &str) -> bool {
        self.models.contains_key(entity_name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelDefinition> {
        self.models.values()
    }

    /// Relationship ends that resolve to no registered entity, as
    /// `(source, target)` pairs in registry order. A non-empty result
    /// usually means the model set is incomplete.
    pub fn dangling_targets(&self) -> Vec<(String, String)> {
        let mut dangling = Vec::new();
        for model in self.models.values() {
            for rel in &model.relationships {
                if !self.models.contains_key(&rel.target_entity) {
                    dangling.push((model.entity_name.clone(), rel.target_entity.clone()));
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::model::{RawEntity, RawField, RawRelationship};
    use crate::parser;

    fn parsed(name: &str, relationships: Vec<RawRelationship>) -> ModelDefinition {
        let raw = RawEntity {
            name: name.to_string(),
            fields: vec![RawField {
                name: "name".to_string(),
                field_type: "string".to_string(),
                nullable: false,
                doc: None,
            }],
            relationships,
            doc: None,
        };
        parser::parse(&raw, &GenerationConfig::default()).unwrap()
    }

    fn edge(target: &str) -> RawRelationship {
        RawRelationship {
            target: target.to_string(),
            source_multiplicity: "1".to_string(),
            target_multiplicity: "*".to_string(),
            doc: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = ModelRegistry::new();
        assert!(registry.insert(parsed("Order", vec![])));
        assert!(registry.contains("Order"));
        assert_eq!(registry.get("Order").unwrap().entity_name, "Order");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut registry = ModelRegistry::new();
        let first = parsed("Order", vec![edge("Product")]);
        let second = parsed("Order", vec![]);

        assert!(registry.insert(first));
        assert!(!registry.insert(second));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Order").unwrap().relationships.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let registry = ModelRegistry::from_models(vec![
            parsed("Zebra", vec![]),
            parsed("Apple", vec![]),
            parsed("Mango", vec![]),
        ]);
        let names: Vec<&str> = registry.iter().map(|m| m.entity_name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_dangling_targets() {
        let registry = ModelRegistry::from_models(vec![
            parsed("Order", vec![edge("Product"), edge("Customer")]),
            parsed("Product", vec![]),
        ]);
        assert_eq!(
            registry.dangling_targets(),
            vec![("Order".to_string(), "Customer".to_string())]
        );
    }
}
