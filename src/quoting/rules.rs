//! Eligibility rule tables.
//!
//! Every table the validator consults lives here as plain data so a new
//! rule revision is a configuration change, not a code change.
//! `RuleSet::default()` is the current production revision.

use serde::{Deserialize, Serialize};

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn describe(&self) -> String {
        format!("between {} and {}", self.min, self.max)
    }
}

/// Half-open real range `[min, below)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FractionRange {
    pub min: f64,
    pub below: f64,
}

impl FractionRange {
    pub const fn new(min: f64, below: f64) -> Self {
        Self { min, below }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.below
    }

    pub fn describe(&self) -> String {
        format!("at least {} and below {}", self.min, self.below)
    }
}

/// Brand allow-list partitioned by origin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrandGroups {
    /// Brands subject to the regional year restriction.
    pub russian: Vec<String>,
    pub european: Vec<String>,
}

impl Default for BrandGroups {
    fn default() -> Self {
        Self {
            russian: strings(&["KAMAZ", "MAZ", "NEFAZ", "TONAR", "GAZ", "URAL"]),
            european: strings(&[
                "MAN",
                "DAF",
                "MERCEDES",
                "VOLVO",
                "SCANIA",
                "RENAULT",
                "IVECO",
                "SCHMITZ",
                "KOGEL",
                "KRONE",
                "WIELTON",
                "SCHWARZMULLER",
                "FLIEGL",
                "GRUNWALD",
            ]),
        }
    }
}

impl BrandGroups {
    pub fn is_russian(&self, brand: &str) -> bool {
        self.russian.iter().any(|b| b == brand)
    }

    pub fn is_european(&self, brand: &str) -> bool {
        self.european.iter().any(|b| b == brand)
    }

    pub fn is_allowed(&self, brand: &str) -> bool {
        self.is_russian(brand) || self.is_european(brand)
    }

    /// Both groups concatenated, Russian first.
    pub fn all(&self) -> Vec<String> {
        self.russian
            .iter()
            .chain(self.european.iter())
            .cloned()
            .collect()
    }
}

/// A complete, versioned set of eligibility rules.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleSet {
    /// Free-form label identifying this rule revision in logs.
    pub revision: String,

    /// Accepted `vehicle_type` values (lowercase).
    pub vehicle_types: Vec<String>,

    /// Every cargo-body subtype the service recognises (lowercase).
    pub known_subtypes: Vec<String>,

    /// Subset of `known_subtypes` eligible for financing.
    pub allowed_subtypes: Vec<String>,

    pub brands: BrandGroups,

    pub year: IntRange,

    pub downpayment: FractionRange,

    pub price: IntRange,

    /// Stricter model-year range applied to `brands.russian`.
    pub russian_year: IntRange,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            revision: "2021-03".to_string(),
            vehicle_types: strings(&["semitruck", "semitrailer", "dump_truck"]),
            known_subtypes: strings(&[
                "тентованный",
                "шторный",
                "бортовой",
                "платформа",
                "рефрижератор",
                "изотермический",
                "контейнеровоз",
                "самосвальный",
                "цистерна",
                "бензовоз",
                "цементовоз",
                "муковоз",
                "пухтовоз",
                "зерновоз",
                "лесовоз",
                "сортиментовоз",
                "щеповоз",
                "трал",
                "низкорамный",
                "автовоз",
                "панелевоз",
                "скотовоз",
            ]),
            allowed_subtypes: strings(&[
                "тентованный",
                "шторный",
                "бортовой",
                "платформа",
                "рефрижератор",
                "изотермический",
                "контейнеровоз",
                "самосвальный",
            ]),
            brands: BrandGroups::default(),
            year: IntRange::new(2016, 2021),
            downpayment: FractionRange::new(0.0, 0.5),
            price: IntRange::new(1_000_000, 20_000_000),
            russian_year: IntRange::new(2018, 2021),
        }
    }
}

impl RuleSet {
    pub fn is_vehicle_type(&self, value: &str) -> bool {
        self.vehicle_types.iter().any(|t| t == value)
    }

    pub fn is_known_subtype(&self, value: &str) -> bool {
        self.known_subtypes.iter().any(|s| s == value)
    }

    pub fn is_allowed_subtype(&self, value: &str) -> bool {
        self.allowed_subtypes.iter().any(|s| s == value)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
