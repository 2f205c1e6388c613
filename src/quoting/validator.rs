//! Business-rule validation.
//!
//! # Design Decisions
//! - Checks are an ordered table driven by [`validate`]
//! - First failing check wins; later checks never run
//! - Numeric bounds are checked in the order year, downpayment, price
//! - Pure function of the request and the rule tables

use crate::quoting::error::Violation;
use crate::quoting::rules::RuleSet;
use crate::quoting::types::QuoteRequest;

/// A single named precondition.
pub struct Check {
    pub name: &'static str,
    pub run: fn(&QuoteRequest, &RuleSet) -> Result<(), Violation>,
}

/// Checks in evaluation order.
pub const CHECKS: &[Check] = &[
    Check {
        name: "vehicle_type",
        run: check_vehicle_type,
    },
    Check {
        name: "vehicle_subtype",
        run: check_vehicle_subtype,
    },
    Check {
        name: "numeric_ranges",
        run: check_numeric_ranges,
    },
    Check {
        name: "regional_year",
        run: check_regional_year,
    },
    Check {
        name: "brand_origin",
        run: check_brand_origin,
    },
];

/// Run every check in order, stopping at the first violation.
pub fn validate(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    for check in CHECKS {
        if let Err(violation) = (check.run)(request, rules) {
            tracing::debug!(
                check = check.name,
                kind = violation.kind().as_str(),
                "Quote request rejected"
            );
            return Err(violation);
        }
    }
    Ok(())
}

fn check_vehicle_type(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    if rules.is_vehicle_type(&request.vehicle_type) {
        Ok(())
    } else {
        Err(Violation::UnsupportedVehicleType {
            value: request.vehicle_type.clone(),
            allowed: rules.vehicle_types.clone(),
        })
    }
}

fn check_vehicle_subtype(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    let Some(subtype) = &request.vehicle_subtype else {
        return Ok(());
    };
    if !rules.is_known_subtype(subtype) {
        return Err(Violation::UnknownSubtype {
            value: subtype.clone(),
        });
    }
    if !rules.is_allowed_subtype(subtype) {
        return Err(Violation::DisallowedSubtype {
            value: subtype.clone(),
            allowed: rules.allowed_subtypes.clone(),
        });
    }
    Ok(())
}

fn check_numeric_ranges(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    if !rules.year.contains(request.year) {
        return Err(Violation::OutOfRange {
            field: "year",
            bound: rules.year.describe(),
            value: request.year.to_string(),
        });
    }
    if !rules.downpayment.contains(request.downpayment) {
        return Err(Violation::OutOfRange {
            field: "downpayment",
            bound: rules.downpayment.describe(),
            value: request.downpayment.to_string(),
        });
    }
    if !rules.price.contains(request.price) {
        return Err(Violation::OutOfRange {
            field: "price",
            bound: rules.price.describe(),
            value: request.price.to_string(),
        });
    }
    Ok(())
}

fn check_regional_year(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    if rules.brands.is_russian(&request.brand) && !rules.russian_year.contains(request.year) {
        return Err(Violation::RegionalYearRestriction {
            brand: request.brand.clone(),
            bound: rules.russian_year.describe(),
            year: request.year,
        });
    }
    Ok(())
}

fn check_brand_origin(request: &QuoteRequest, rules: &RuleSet) -> Result<(), Violation> {
    if rules.brands.is_allowed(&request.brand) {
        Ok(())
    } else {
        Err(Violation::DisallowedBrand {
            value: request.brand.clone(),
            allowed: rules.brands.all(),
        })
    }
}
