//! Type mapping from the abstract field-type vocabulary to target-language
//! type systems.
//!
//! The scalar vocabulary is a closed enum; each emission target (C#/.NET,
//! Python/Django) provides a pure lookup from [`ScalarType`] to a
//! [`TargetType`] bundle. Unknown type tags never fail: they resolve to the
//! string-equivalent default so a best-effort generation run can proceed.

pub mod csharp;
pub mod django;

use serde::{Deserialize, Serialize};

/// Default minimum length for password fields.
const PASSWORD_MIN_LENGTH: u32 = 8;

/// Abstract field type vocabulary shared by all emission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Text,
    Int,
    Long,
    Short,
    Decimal,
    Float,
    Double,
    Boolean,
    Date,
    DateTime,
    Timestamp,
    Uuid,
    Json,
    Binary,
    Enum,
}

impl ScalarType {
    /// Parse a raw type tag. Matching is case-insensitive and tolerant of
    /// surrounding whitespace; a few common aliases are accepted.
    ///
    /// Returns `None` for unknown tags so callers can warn before falling
    /// back via [`ScalarType::resolve`].
    pub fn parse(tag: &str) -> Option<ScalarType> {
        match tag.trim().to_lowercase().as_str() {
            "string" => Some(ScalarType::String),
            "text" => Some(ScalarType::Text),
            "int" | "integer" => Some(ScalarType::Int),
            "long" => Some(ScalarType::Long),
            "short" => Some(ScalarType::Short),
            "decimal" => Some(ScalarType::Decimal),
            "float" => Some(ScalarType::Float),
            "double" => Some(ScalarType::Double),
            "boolean" | "bool" => Some(ScalarType::Boolean),
            "date" => Some(ScalarType::Date),
            "datetime" => Some(ScalarType::DateTime),
            "timestamp" => Some(ScalarType::Timestamp),
            "uuid" | "guid" => Some(ScalarType::Uuid),
            "json" => Some(ScalarType::Json),
            "binary" => Some(ScalarType::Binary),
            "enum" => Some(ScalarType::Enum),
            _ => None,
        }
    }

    /// Resolve a raw type tag, falling back to [`ScalarType::String`] for
    /// unknown or empty tags. Never errors.
    pub fn resolve(tag: &str) -> ScalarType {
        Self::parse(tag).unwrap_or(ScalarType::String)
    }

    /// Whether this type maps to a text column on every target.
    /// String-like fields get a max-length validation rule.
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            ScalarType::String | ScalarType::Text | ScalarType::Json | ScalarType::Enum
        )
    }
}

/// Target-language representation of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetType {
    /// Type name in the target language (e.g. `"decimal"`, `"Decimal"`)
    pub language_type: &'static str,
    /// Storage-layer type: SQL Server column type for C#, `models.*Field`
    /// class for Django
    pub storage_type: &'static str,
    pub is_value_type: bool,
    pub is_numeric: bool,
    pub is_temporal: bool,
}

/// Supported emission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    CSharp,
    Django,
}

impl TargetLanguage {
    /// Map a scalar type to this target's representation.
    pub fn target_type(&self, scalar: ScalarType) -> TargetType {
        match self {
            TargetLanguage::CSharp => csharp::target_type(scalar),
            TargetLanguage::Django => django::target_type(scalar),
        }
    }
}

/// A single validation rule attached to a generated field.
///
/// Rules are target-agnostic descriptors; renderers translate them into
/// DataAnnotations attributes, Django validators, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    Required,
    MaxLength { limit: u32 },
    Email,
    Phone,
    Url,
    Password { min_length: u32 },
}

/// Map a raw type tag straight to a target-language representation.
///
/// Composes [`ScalarType::resolve`] with the target table, so unknown tags
/// come back as the target's string type rather than an error.
pub fn map_type(target: TargetLanguage, tag: &str) -> TargetType {
    target.target_type(ScalarType::resolve(tag))
}

/// Derive the validation rules for a field.
///
/// Ordering is part of the contract (generated annotation blocks are
/// compared against golden output): the required rule comes first, then the
/// max-length rule for string-like types, then the name-based format rules
/// in the order email, phone, url, password.
///
/// # Example
///
/// ```ignore
/// use modelgen::typemap::{map_annotations, ValidationRule};
///
/// let rules = map_annotations("userEmail", "string", false, 255);
/// assert_eq!(rules[0], ValidationRule::Required);
/// ```
pub fn map_annotations(
    field_name: &str,
    type_tag: &str,
    nullable: bool,
    default_max_length: u32,
) -> Vec<ValidationRule> {
    let mut rules = Vec::new();

    if !nullable {
        rules.push(ValidationRule::Required);
    }

    if ScalarType::resolve(type_tag).is_string_like() {
        rules.push(ValidationRule::MaxLength {
            limit: default_max_length,
        });
    }

    let lowered = field_name.to_lowercase();
    if lowered.contains("email") {
        rules.push(ValidationRule::Email);
    }
    if lowered.contains("phone") {
        rules.push(ValidationRule::Phone);
    }
    if lowered.contains("url") || lowered.contains("website") {
        rules.push(ValidationRule::Url);
    }
    if lowered.contains("password") {
        rules.push(ValidationRule::Password {
            min_length: PASSWORD_MIN_LENGTH,
        });
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ScalarType::parse("String"), Some(ScalarType::String));
        assert_eq!(ScalarType::parse("DATETIME"), Some(ScalarType::DateTime));
        assert_eq!(ScalarType::parse("  uuid  "), Some(ScalarType::Uuid));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(ScalarType::parse("integer"), Some(ScalarType::Int));
        assert_eq!(ScalarType::parse("bool"), Some(ScalarType::Boolean));
        assert_eq!(ScalarType::parse("guid"), Some(ScalarType::Uuid));
    }

    #[test]
    fn test_resolve_falls_back_to_string() {
        assert_eq!(ScalarType::resolve("totally-unknown-tag"), ScalarType::String);
        assert_eq!(ScalarType::resolve(""), ScalarType::String);
    }

    #[test]
    fn test_map_type_never_fails() {
        let t = map_type(TargetLanguage::CSharp, "totally-unknown-tag");
        assert_eq!(t.language_type, "string");
        let t = map_type(TargetLanguage::Django, "decimal");
        assert_eq!(t.storage_type, "models.DecimalField");
    }

    #[test]
    fn test_annotation_ordering() {
        let rules = map_annotations("userEmail", "string", false, 255);
        assert_eq!(
            rules,
            vec![
                ValidationRule::Required,
                ValidationRule::MaxLength { limit: 255 },
                ValidationRule::Email,
            ]
        );
    }

    #[test]
    fn test_nullable_field_has_no_required_rule() {
        let rules = map_annotations("nickname", "string", true, 255);
        assert_eq!(rules, vec![ValidationRule::MaxLength { limit: 255 }]);
    }

    #[test]
    fn test_numeric_field_has_no_max_length() {
        let rules = map_annotations("total", "decimal", false, 255);
        assert_eq!(rules, vec![ValidationRule::Required]);
    }

    #[test]
    fn test_name_heuristics() {
        let rules = map_annotations("homepageUrl", "string", true, 100);
        assert_eq!(
            rules,
            vec![ValidationRule::MaxLength { limit: 100 }, ValidationRule::Url]
        );

        let rules = map_annotations("PasswordHash", "string", false, 255);
        assert_eq!(
            rules,
            vec![
                ValidationRule::Required,
                ValidationRule::MaxLength { limit: 255 },
                ValidationRule::Password { min_length: 8 },
            ]
        );
    }

    #[test]
    fn test_unknown_type_is_treated_as_string() {
        let rules = map_annotations("note", "varchar2", true, 255);
        assert_eq!(rules, vec![ValidationRule::MaxLength { limit: 255 }]);
    }
}
