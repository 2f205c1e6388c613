//! Rule violations reported to clients.

use serde::Serialize;
use thiserror::Error;

/// Broad category of a violation, used for status codes and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    TypeConversion,
    UnsupportedVehicleType,
    UnknownSubtype,
    DisallowedSubtype,
    OutOfRange,
    DisallowedBrand,
    RegionalYearRestriction,
}

impl ViolationKind {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::TypeConversion => "type_conversion",
            ViolationKind::UnsupportedVehicleType => "unsupported_vehicle_type",
            ViolationKind::UnknownSubtype => "unknown_subtype",
            ViolationKind::DisallowedSubtype => "disallowed_subtype",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::DisallowedBrand => "disallowed_brand",
            ViolationKind::RegionalYearRestriction => "regional_year_restriction",
        }
    }

    /// True for failures of the request's shape rather than its values.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ViolationKind::MissingField | ViolationKind::TypeConversion
        )
    }
}

/// The single reason a quote request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("`{field}` parameter is missing")]
    MissingField { field: &'static str },

    #[error("`{field}` should be {expected}, but now it is \"{value}\"")]
    TypeConversion {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("`vehicle_type` should be one of: {}, but now it is \"{value}\"", .allowed.join(", "))]
    UnsupportedVehicleType { value: String, allowed: Vec<String> },

    #[error("`vehicle_subtype` \"{value}\" is not a known vehicle subtype")]
    UnknownSubtype { value: String },

    #[error("`vehicle_subtype` should be one of: {}, but now it is \"{value}\"", .allowed.join(", "))]
    DisallowedSubtype { value: String, allowed: Vec<String> },

    #[error("`{field}` should be {bound}, but now it is \"{value}\"")]
    OutOfRange {
        field: &'static str,
        bound: String,
        value: String,
    },

    #[error("`brand` should be one of: {}, but now it is \"{value}\"", .allowed.join(", "))]
    DisallowedBrand { value: String, allowed: Vec<String> },

    #[error("for brand \"{brand}\" `year` should be {bound}, but now it is \"{year}\"")]
    RegionalYearRestriction {
        brand: String,
        bound: String,
        year: i64,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::MissingField { .. } => ViolationKind::MissingField,
            Violation::TypeConversion { .. } => ViolationKind::TypeConversion,
            Violation::UnsupportedVehicleType { .. } => ViolationKind::UnsupportedVehicleType,
            Violation::UnknownSubtype { .. } => ViolationKind::UnknownSubtype,
            Violation::DisallowedSubtype { .. } => ViolationKind::DisallowedSubtype,
            Violation::OutOfRange { .. } => ViolationKind::OutOfRange,
            Violation::DisallowedBrand { .. } => ViolationKind::DisallowedBrand,
            Violation::RegionalYearRestriction { .. } => ViolationKind::RegionalYearRestriction,
        }
    }

    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Violation::MissingField { field }
            | Violation::TypeConversion { field, .. }
            | Violation::OutOfRange { field, .. } => field,
            Violation::UnsupportedVehicleType { .. } => "vehicle_type",
            Violation::UnknownSubtype { .. } | Violation::DisallowedSubtype { .. } => {
                "vehicle_subtype"
            }
            Violation::DisallowedBrand { .. } => "brand",
            Violation::RegionalYearRestriction { .. } => "year",
        }
    }
}
