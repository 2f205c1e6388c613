//! Quote request and result types.

use serde::{Deserialize, Serialize};

/// A normalized financing request.
///
/// Built once by [`crate::quoting::params::parse_query`] and read-only after
/// that. String fields are already case-folded and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Vehicle category, lowercase (e.g. `semitruck`).
    pub vehicle_type: String,
    /// Optional cargo-body subtype, lowercase.
    pub vehicle_subtype: Option<String>,
    /// Manufacturer brand, uppercase.
    pub brand: String,
    /// Model year.
    pub year: i64,
    /// Vehicle price in base currency units.
    pub price: i64,
    /// Fraction of the price paid upfront.
    pub downpayment: f64,
    /// Whether `price` already includes VAT.
    #[serde(rename = "VAT_included")]
    pub vat_included: bool,
}

/// A monetary figure, always reported VAT-inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: i64,
    #[serde(rename = "VAT_included")]
    pub vat_included: bool,
}

impl Amount {
    pub fn with_vat(value: i64) -> Self {
        Self {
            value,
            vat_included: true,
        }
    }
}

/// Calculator output returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Restated down-payment amount.
    pub downpayment: Amount,
    /// Level monthly payment over the full term.
    pub monthly_payment: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_format() {
        let result = QuoteResult {
            downpayment: Amount::with_vat(600_000),
            monthly_payment: Amount::with_vat(151_234),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["downpayment"]["value"], 600_000);
        assert_eq!(json["downpayment"]["VAT_included"], true);
        assert_eq!(json["monthly_payment"]["value"], 151_234);
        assert_eq!(json["monthly_payment"]["VAT_included"], true);
    }
}
