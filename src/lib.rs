//! # Modelgen: Model Normalization and Type Mapping Core
//!
//! Modelgen is the mapping layer of a multi-target boilerplate generator:
//! it normalizes UML-style class models (entities, typed fields,
//! relationship edges) into structured definitions that template renderers
//! turn into C#/.NET and Python/Django source text.
//!
//! ## Features
//!
//! - **Closed type vocabulary**: abstract field types map to per-target
//!   type bundles (language type, storage type, value/numeric/temporal flags)
//! - **Relationship classification**: multiplicity pairs resolve to
//!   one-to-one, one-to-many, or many-to-many with derived navigation,
//!   foreign-key, and join-entity names
//! - **Validation rules**: deterministic, ordered annotation descriptors
//!   derived from field names and types
//! - **YAML model loading**: one entity per file, validated up front
//!
//! ## Example
//!
//! ```yaml
//! model:
//!   name: Order
//!   fields:
//!     - name: total
//!       type: decimal
//!     - name: customerEmail
//!       type: string
//!       nullable: true
//!   relationships:
//!     - target: Product
//!       source_multiplicity: "*"
//!       target_multiplicity: "*"
//! ```
//!
//! ```ignore
//! use modelgen::{loader, parser, GenerationConfig, ModelRegistry};
//!
//! let config = GenerationConfig::default();
//! let raws = loader::load_models("config/models")?;
//! let models = raws
//!     .iter()
//!     .map(|raw| parser::parse(raw, &config))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let registry = ModelRegistry::from_models(models);
//! ```

pub mod config;
pub mod loader;
pub mod model;
pub mod naming;
pub mod parser;
pub mod registry;
pub mod relationship;
pub mod typemap;

// Re-export key types
pub use config::GenerationConfig;
pub use loader::{load_model, load_models};
pub use model::{
    FieldDefinition, ModelDefinition, ModelError, ModelSpec, RawEntity, RawField, RawRelationship,
};
pub use registry::ModelRegistry;
pub use relationship::{
    classify, resolve, resolve_checked, DeleteBehavior, Multiplicity, RelationshipDescriptor,
    RelationshipKind,
};
pub use typemap::{
    map_annotations, map_type, ScalarType, TargetLanguage, TargetType, ValidationRule,
};
