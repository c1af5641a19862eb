//! C#/.NET target type table.
//!
//! Storage types are SQL Server column types, matching what the EF Core
//! migration templates expect.

use super::{ScalarType, TargetType};

const fn reference(language_type: &'static str, storage_type: &'static str) -> TargetType {
    TargetType {
        language_type,
        storage_type,
        is_value_type: false,
        is_numeric: false,
        is_temporal: false,
    }
}

const fn numeric(language_type: &'static str, storage_type: &'static str) -> TargetType {
    TargetType {
        language_type,
        storage_type,
        is_value_type: true,
        is_numeric: true,
        is_temporal: false,
    }
}

const fn temporal(language_type: &'static str, storage_type: &'static str) -> TargetType {
    TargetType {
        language_type,
        storage_type,
        is_value_type: true,
        is_numeric: false,
        is_temporal: true,
    }
}

const fn value(language_type: &'static str, storage_type: &'static str) -> TargetType {
    TargetType {
        language_type,
        storage_type,
        is_value_type: true,
        is_numeric: false,
        is_temporal: false,
    }
}

/// Map a scalar type to its C# representation.
pub fn target_type(scalar: ScalarType) -> TargetType {
    match scalar {
        ScalarType::String => reference("string", "nvarchar(255)"),
        ScalarType::Text => reference("string", "nvarchar(max)"),
        ScalarType::Int => numeric("int", "int"),
        ScalarType::Long => numeric("long", "bigint"),
        ScalarType::Short => numeric("short", "smallint"),
        ScalarType::Decimal => numeric("decimal", "decimal(18,2)"),
        ScalarType::Float => numeric("float", "real"),
        ScalarType::Double => numeric("double", "float"),
        ScalarType::Boolean => value("bool", "bit"),
        ScalarType::Date => temporal("DateTime", "date"),
        ScalarType::DateTime => temporal("DateTime", "datetime2"),
        ScalarType::Timestamp => temporal("DateTimeOffset", "datetimeoffset"),
        ScalarType::Uuid => value("Guid", "uniqueidentifier"),
        ScalarType::Json => reference("string", "nvarchar(max)"),
        ScalarType::Binary => reference("byte[]", "varbinary(max)"),
        ScalarType::Enum => reference("string", "nvarchar(255)"),
    }
}
