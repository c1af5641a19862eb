//! Identifier naming helpers for generated code.
//!
//! All derived names (tables, collections, navigation properties, join
//! entities) funnel through this module so generated identifiers stay
//! consistent across targets.

use convert_case::{Case, Casing};

/// Convert a string to snake_case
pub fn to_snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Convert a string to PascalCase
pub fn to_pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// Pluralize a name by appending `"s"`.
///
/// Intentionally naive: no irregular-plural handling ("Category" becomes
/// "Categorys"). Generated projects already contain identifiers built
/// this way, so the scheme is load-bearing and must not change.
pub fn pluralize(s: &str) -> String {
    format!("{}s", s)
}
