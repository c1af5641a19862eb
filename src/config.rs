//! Generation run configuration.
//!
//! A [`GenerationConfig`] covers one generation run: which emission
//! targets to produce and the knobs the mapping layer consults. Loadable
//! from a YAML file; every field has a default so an empty config works.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::ModelError;
use crate::typemap::TargetLanguage;

fn default_targets() -> Vec<TargetLanguage> {
    vec![TargetLanguage::CSharp, TargetLanguage::Django]
}

fn default_string_length() -> u32 {
    255
}

/// Configuration for a single generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Emission targets to generate for
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetLanguage>,

    /// Max-length bound applied to string-like fields
    #[serde(default = "default_string_length")]
    pub default_string_length: u32,

    /// Reject multiplicity pairs outside the classification table instead
    /// of defaulting them to one-to-many
    #[serde(default)]
    pub strict_relationships: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            default_string_length: default_string_length(),
            strict_relationships: false,
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GenerationConfig, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ModelError::Yaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
