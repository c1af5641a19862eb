//! Python/Django target type table.
//!
//! Language types are Python type-hint names; storage types are Django
//! model field classes.

use super::{ScalarType, TargetType};

const fn entry(
    language_type: &'static str,
    storage_type: &'static str,
    is_numeric: bool,
    is_temporal: bool,
) -> TargetType {
    TargetType {
        language_type,
        storage_type,
        // Python has no value/reference split; numeric and temporal
        // entries carry the flag so the tables stay interchangeable.
        is_value_type: is_numeric || is_temporal,
        is_numeric,
        is_temporal,
    }
}

/// Map a scalar type to its Django representation.
pub fn target_type(scalar: ScalarType) -> TargetType {
    match scalar {
        ScalarType::String => entry("str", "models.CharField", false, false),
        ScalarType::Text => entry("str", "models.TextField", false, false),
        ScalarType::Int => entry("int", "models.IntegerField", true, false),
        ScalarType::Long => entry("int", "models.BigIntegerField", true, false),
        ScalarType::Short => entry("int", "models.SmallIntegerField", true, false),
        ScalarType::Decimal => entry("Decimal", "models.DecimalField", true, false),
        ScalarType::Float => entry("float", "models.FloatField", true, false),
        ScalarType::Double => entry("float", "models.FloatField", true, false),
        ScalarType::Boolean => entry("bool", "models.BooleanField", false, false),
        ScalarType::Date => entry("datetime.date", "models.DateField", false, true),
        ScalarType::DateTime => entry("datetime.datetime", "models.DateTimeField", false, true),
        ScalarType::Timestamp => entry("datetime.datetime", "models.DateTimeField", false, true),
        ScalarType::Uuid => entry("uuid.UUID", "models.UUIDField", false, false),
        ScalarType::Json => entry("dict", "models.JSONField", false, false),
        ScalarType::Binary => entry("bytes", "models.BinaryField", false, false),
        ScalarType::Enum => entry("str", "models.CharField", false, false),
    }
}
