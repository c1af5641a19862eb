//! YAML model loader.
//!
//! Loads raw entity descriptions from `model:`-wrapped YAML files, one
//! entity per file. Structural problems (empty names, missing relationship
//! targets) are reported at load time so a generation run fails before any
//! output is produced.

use std::fs;
use std::path::Path;

use crate::model::{ModelError, ModelSpec, RawEntity};

/// Load all model definitions from a directory.
///
/// Only `.yaml` and `.yml` files are considered. Files load in directory
/// order; the first failure aborts the sweep.
///
/// # Example
///
/// ```ignore
/// use modelgen::loader::load_models;
///
/// let models = load_models("config/models").unwrap();
/// ```
pub fn load_models<P: AsRef<Path>>(dir: P) -> Result<Vec<RawEntity>, ModelError> {
    let dir_path = dir.as_ref();

    if !dir_path.is_dir() {
        return Err(ModelError::Io {
            path: dir_path.display().to_string(),
            message: "not a directory".to_string(),
        });
    }

    let read_dir = fs::read_dir(dir_path).map_err(|e| ModelError::Io {
        path: dir_path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut models = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ModelError::Io {
            path: dir_path.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if let Some(ext) = path.extension() {
            if ext == "yaml" || ext == "yml" {
                models.push(load_model(&path)?);
            }
        }
    }

    Ok(models)
}

/// Load a single model definition from a YAML file.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<RawEntity, ModelError> {
    let path = path.as_ref();

    let yaml_content = fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let spec: ModelSpec = serde_yaml::from_str(&yaml_content).map_err(|e| ModelError::Yaml {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    validate_raw(&spec.model)?;

    Ok(spec.model)
}

/// Validate a raw entity's structure.
///
/// Checks for:
/// - Non-empty entity name
/// - At least one field, each with a non-empty name
/// - Relationship edges with non-empty targets
fn validate_raw(raw: &RawEntity) -> Result<(), ModelError> {
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

    for field in &raw.fields {
        if field.name.trim().is_empty() {
            return Err(ModelError::InvalidModel {
                entity: raw.name.clone(),
                reason: "field name is empty".to_string(),
            });
        }
    }

    for rel in &raw.relationships {
        if rel.target.trim().is_empty() {
            return Err(ModelError::InvalidModel {
                entity: raw.name.clone(),
                reason: "relationship target is empty".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_yaml(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_model() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(
            &dir,
            "order.yaml",
            r#"
model:
  name: Order
  fields:
    - name: total
      type: decimal
  relationships:
    - target: Product
      source_multiplicity: "*"
      target_multiplicity: "*"
"#,
        );

        let raw = load_model(&path).unwrap();
        assert_eq!(raw.name, "Order");
        assert_eq!(raw.fields.len(), 1);
        assert_eq!(raw.relationships.len(), 1);
    }

    #[test]
    fn test_load_models_sweeps_directory() {
        let dir = TempDir::new().unwrap();
        write_yaml(
            &dir,
            "order.yaml",
            "model:\n  name: Order\n  fields:\n    - name: total\n      type: decimal\n",
        );
        write_yaml(
            &dir,
            "product.yml",
            "model:\n  name: Product\n  fields:\n    - name: sku\n      type: string\n",
        );
        write_yaml(&dir, "notes.txt", "not a model");

        let models = load_models(dir.path()).unwrap();
        assert_eq!(models.len(), 2);
    }

    #[test]
    fn test_load_models_missing_directory() {
        let err = load_models("/nonexistent/models").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn test_load_model_rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(&dir, "broken.yaml", "model: [not, a, mapping]");
        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, ModelError::Yaml { .. }));
    }

    #[test]
    fn test_load_model_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(
            &dir,
            "anon.yaml",
            "model:\n  fields:\n    - name: total\n      type: decimal\n",
        );
        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, ModelError::InvalidModel { .. }));
    }

    #[test]
    fn test_load_model_rejects_missing_relationship_target() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(
            &dir,
            "order.yaml",
            r#"
model:
  name: Order
  fields:
    - name: total
      type: decimal
  relationships:
    - target: ""
"#,
        );
        let err = load_model(&path).unwrap_err();
        assert!(err.to_string().contains("relationship target"));
    }
}
