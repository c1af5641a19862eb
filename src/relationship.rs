//! Relationship classification and name derivation.
//!
//! A relationship edge is classified from its multiplicity pair into a
//! closed [`RelationshipKind`], then the generation-relevant names
//! (navigation property, foreign key, join entity) are derived by pure
//! string composition. No registry access happens here: both ends are
//! plain entity names, resolved later by the caller.

use serde::{Deserialize, Serialize};

use crate::model::ModelError;
use crate::naming::pluralize;

/// One end of a UML-style multiplicity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Multiplicity {
    /// `"1"`: exactly one
    One,
    /// `"*"`: many
    Many,
    /// `"0..1"`: optional
    Optional,
}

impl Multiplicity {
    /// Parse a multiplicity token. Returns `None` for unrecognized tokens;
    /// classification routes those through the documented default.
    pub fn parse(token: &str) -> Option<Multiplicity> {
        match token.trim() {
            "1" => Some(Multiplicity::One),
            "*" => Some(Multiplicity::Many),
            "0..1" => Some(Multiplicity::Optional),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Multiplicity::One => "1",
            Multiplicity::Many => "*",
            Multiplicity::Optional => "0..1",
        }
    }
}

/// Classified relationship kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToMany,
}

/// What happens to dependent rows when the principal is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteBehavior {
    Cascade,
    SetNull,
}

/// Fully resolved relationship between two entities.
///
/// Both ends are name references. `foreign_key_name` applies to the
/// one-to-one and one-to-many kinds; `join_entity_name` is only present
/// for many-to-many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDescriptor {
    pub source_entity: String,
    pub target_entity: String,
    pub source_multiplicity: String,
    pub target_multiplicity: String,
    pub kind: RelationshipKind,
    pub navigation_property: String,
    pub foreign_key_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_entity_name: Option<String>,
    pub foreign_key_nullable: bool,
    pub delete_behavior: DeleteBehavior,
}

/// Classify a multiplicity pair.
///
/// The table is total: pairs outside it (unrecognized tokens, `"0..1"`
/// ends) fall back to one-to-many. The second element reports whether the
/// fallback was taken, so callers can warn or reject.
pub fn classify(source_multiplicity: &str, target_multiplicity: &str) -> (RelationshipKind, bool) {
    use Multiplicity::{Many, One};

    match (
        Multiplicity::parse(source_multiplicity),
        Multiplicity::parse(target_multiplicity),
    ) {
        (Some(One), Some(Many)) | (Some(Many), Some(One)) => (RelationshipKind::OneToMany, false),
        (Some(Many), Some(Many)) => (RelationshipKind::ManyToMany, false),
        (Some(One), Some(One)) => (RelationshipKind::OneToOne, false),
        _ => (RelationshipKind::OneToMany, true),
    }
}

/// Resolve a relationship edge into a [`RelationshipDescriptor`].
///
/// Never fails: pairs outside the classification table default to
/// one-to-many and emit a warning. Use [`resolve_checked`] to reject them
/// instead.
///
/// # Example
///
/// ```ignore
/// use modelgen::relationship::{resolve, RelationshipKind};
///
/// let rel = resolve("Order", "Product", "*", "*");
/// assert_eq!(rel.kind, RelationshipKind::ManyToMany);
/// assert_eq!(rel.join_entity_name.as_deref(), Some("OrderProduct"));
/// ```
pub fn resolve(
    source_entity: &str,
    target_entity: &str,
    source_multiplicity: &str,
    target_multiplicity: &str,
) -> RelationshipDescriptor {
    let (kind, ambiguous) = classify(source_multiplicity, target_multiplicity);
    if ambiguous {
        tracing::warn!(
            "Ambiguous multiplicity pair ({}, {}) on {} -> {}, defaulting to one-to-many",
            source_multiplicity,
            target_multiplicity,
            source_entity,
            target_entity
        );
    }
    build_descriptor(
        source_entity,
        target_entity,
        source_multiplicity,
        target_multiplicity,
        kind,
    )
}

/// Strict variant of [`resolve`]: a pair outside the classification table
/// is an error rather than a defaulted warning.
pub fn resolve_checked(
    source_entity: &str,
    target_entity: &str,
    source_multiplicity: &str,
    target_multiplicity: &str,
) -> Result<RelationshipDescriptor, ModelError> {
    let (kind, ambiguous) = classify(source_multiplicity, target_multiplicity);
    if ambiguous {
        return Err(ModelError::AmbiguousRelationship {
            source_entity: source_entity.to_string(),
            target_entity: target_entity.to_string(),
            source_multiplicity: source_multiplicity.to_string(),
            target_multiplicity: target_multiplicity.to_string(),
        });
    }
    Ok(build_descriptor(
        source_entity,
        target_entity,
        source_multiplicity,
        target_multiplicity,
        kind,
    ))
}

fn build_descriptor(
    source_entity: &str,
    target_entity: &str,
    source_multiplicity: &str,
    target_multiplicity: &str,
    kind: RelationshipKind,
) -> RelationshipDescriptor {
    // Collection end iff the target end is many.
    let navigation_property = if Multiplicity::parse(target_multiplicity) == Some(Multiplicity::Many)
    {
        pluralize(target_entity)
    } else {
        target_entity.to_string()
    };

    let join_entity_name = match kind {
        RelationshipKind::ManyToMany => {
            Some(format!("{}{}", source_entity, target_entity))
        }
        _ => None,
    };

    let foreign_key_nullable =
        Multiplicity::parse(source_multiplicity) == Some(Multiplicity::Optional);

    // Join rows always cascade with their owners; a required reference
    // cascades, an optional one is detached instead.
    let delete_behavior = match kind {
        RelationshipKind::ManyToMany => DeleteBehavior::Cascade,
        _ if foreign_key_nullable => DeleteBehavior::SetNull,
        _ => DeleteBehavior::Cascade,
    };

    RelationshipDescriptor {
        source_entity: source_entity.to_string(),
        target_entity: target_entity.to_string(),
        source_multiplicity: source_multiplicity.to_string(),
        target_multiplicity: target_multiplicity.to_string(),
        kind,
        navigation_property,
        foreign_key_name: format!("{}Id", source_entity),
        join_entity_name,
        foreign_key_nullable,
        delete_behavior,
    }
}
