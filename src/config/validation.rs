//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, rates finite, ranges non-empty)
//! - Check rule table consistency (allow-list within vocabulary, disjoint
//!   brand groups, normalized casing)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: QuoterConfig → Result<(), Vec<ConfigIssue>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{PricingConfig, QuoterConfig, RuleSet};
use crate::quoting::rules::IntRange;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path to the offending setting.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every issue found.
pub fn validate_config(config: &QuoterConfig) -> Result<(), Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        issues.push(ConfigIssue::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        issues.push(ConfigIssue::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        issues.push(ConfigIssue::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    validate_pricing(&config.pricing, &mut issues);
    validate_rules(&config.rules, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn validate_pricing(pricing: &PricingConfig, issues: &mut Vec<ConfigIssue>) {
    let rates = [
        ("pricing.base_rate", pricing.base_rate),
        ("pricing.vat_rate", pricing.vat_rate),
        ("pricing.margin_threshold", pricing.margin_threshold),
        ("pricing.low_downpayment_margin", pricing.low_downpayment_margin),
        ("pricing.standard_margin", pricing.standard_margin),
    ];
    for (field, value) in rates {
        if !value.is_finite() || value < 0.0 {
            issues.push(ConfigIssue::new(
                field,
                format!("must be a finite non-negative number, got {value}"),
            ));
        }
    }

    if pricing.periods == 0 {
        issues.push(ConfigIssue::new("pricing.periods", "must be greater than 0"));
    }
}

fn validate_rules(rules: &RuleSet, issues: &mut Vec<ConfigIssue>) {
    if rules.vehicle_types.is_empty() {
        issues.push(ConfigIssue::new("rules.vehicle_types", "must not be empty"));
    }
    check_case(&rules.vehicle_types, "rules.vehicle_types", false, issues);
    check_case(&rules.known_subtypes, "rules.known_subtypes", false, issues);
    check_case(&rules.allowed_subtypes, "rules.allowed_subtypes", false, issues);
    check_case(&rules.brands.russian, "rules.brands.russian", true, issues);
    check_case(&rules.brands.european, "rules.brands.european", true, issues);

    for subtype in &rules.allowed_subtypes {
        if !rules.is_known_subtype(subtype) {
            issues.push(ConfigIssue::new(
                "rules.allowed_subtypes",
                format!("'{subtype}' is not listed in rules.known_subtypes"),
            ));
        }
    }

    let russian: HashSet<&str> = rules.brands.russian.iter().map(String::as_str).collect();
    for brand in &rules.brands.european {
        if russian.contains(brand.as_str()) {
            issues.push(ConfigIssue::new(
                "rules.brands",
                format!("'{brand}' is listed as both russian and european"),
            ));
        }
    }

    check_range(rules.year, "rules.year", issues);
    check_range(rules.price, "rules.price", issues);
    check_range(rules.russian_year, "rules.russian_year", issues);

    let dp = rules.downpayment;
    if !(dp.min.is_finite() && dp.below.is_finite() && 0.0 <= dp.min && dp.min < dp.below && dp.below <= 1.0)
    {
        issues.push(ConfigIssue::new(
            "rules.downpayment",
            format!("must satisfy 0 <= min < below <= 1, got [{}, {})", dp.min, dp.below),
        ));
    }

    if rules.price.min <= 0 {
        issues.push(ConfigIssue::new("rules.price", "min must be positive"));
    }

    if rules.russian_year.min < rules.year.min || rules.russian_year.max > rules.year.max {
        issues.push(ConfigIssue::new(
            "rules.russian_year",
            "must lie within rules.year",
        ));
    }
}

fn check_range(range: IntRange, field: &str, issues: &mut Vec<ConfigIssue>) {
    if range.min > range.max {
        issues.push(ConfigIssue::new(
            field,
            format!("min {} is greater than max {}", range.min, range.max),
        ));
    }
}

fn check_case(values: &[String], field: &str, upper: bool, issues: &mut Vec<ConfigIssue>) {
    for value in values {
        let normalized = if upper {
            value.trim().to_uppercase()
        } else {
            value.trim().to_lowercase()
        };
        if *value != normalized {
            let case = if upper { "upper" } else { "lower" };
            issues.push(ConfigIssue::new(
                field,
                format!("'{value}' must be trimmed and {case}case"),
            ));
        }
    }
}
