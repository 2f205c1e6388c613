//! Query-string normalization.
//!
//! Turns the raw `key -> value` map of a `/quote` request into a
//! [`QuoteRequest`]. Only shape is checked here (presence and types);
//! business rules belong to the validator.

use std::collections::HashMap;
use std::str::FromStr;

use crate::quoting::error::Violation;
use crate::quoting::types::QuoteRequest;

/// Required keys, in the order missing ones are reported.
pub const REQUIRED_PARAMS: [&str; 6] = [
    "vehicle_type",
    "year",
    "VAT_included",
    "downpayment",
    "price",
    "brand",
];

/// Parse a boolean flag the way the public API has always accepted it.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" | "-1" => Some(false),
        _ => None,
    }
}

/// Build a normalized request from raw query parameters.
///
/// Reports the first missing key, then the first value that fails to
/// convert (`year`, `downpayment`, `price`, `VAT_included`).
pub fn parse_query(params: &HashMap<String, String>) -> Result<QuoteRequest, Violation> {
    if let Some(field) = REQUIRED_PARAMS
        .into_iter()
        .find(|key| !params.contains_key(*key))
    {
        return Err(Violation::MissingField { field });
    }

    let vehicle_type = params["vehicle_type"].trim().to_lowercase();
    let vehicle_subtype = params
        .get("vehicle_subtype")
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let brand = params["brand"].trim().to_uppercase();

    let year = parse_number::<i64>(params, "year", "an integer")?;
    let downpayment = parse_number::<f64>(params, "downpayment", "a real number")?;
    if !downpayment.is_finite() {
        return Err(conversion("downpayment", "a real number", &params["downpayment"]));
    }
    let price = parse_number::<i64>(params, "price", "an integer")?;

    let raw_vat = &params["VAT_included"];
    let vat_included =
        parse_bool(raw_vat).ok_or_else(|| conversion("VAT_included", "a bool", raw_vat))?;

    Ok(QuoteRequest {
        vehicle_type,
        vehicle_subtype,
        brand,
        year,
        price,
        downpayment,
        vat_included,
    })
}

fn parse_number<T: FromStr>(
    params: &HashMap<String, String>,
    field: &'static str,
    expected: &'static str,
) -> Result<T, Violation> {
    let raw = &params[field];
    raw.trim()
        .parse::<T>()
        .map_err(|_| conversion(field, expected, raw))
}

fn conversion(field: &'static str, expected: &'static str, raw: &str) -> Violation {
    Violation::TypeConversion {
        field,
        expected,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoting::error::ViolationKind;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid() -> HashMap<String, String> {
        params(&[
            ("vehicle_type", " Dump_Truck"),
            ("year", "2016"),
            ("downpayment", "0.1"),
            ("VAT_included", "0"),
            ("price", "5000000"),
            ("brand", "man "),
        ])
    }

    #[test]
    fn test_normalizes_strings() {
        let request = parse_query(&valid()).unwrap();
        assert_eq!(request.vehicle_type, "dump_truck");
        assert_eq!(request.brand, "MAN");
        assert_eq!(request.vehicle_subtype, None);
        assert_eq!(request.year, 2016);
        assert_eq!(request.price, 5_000_000);
        assert_eq!(request.downpayment, 0.1);
        assert!(!request.vat_included);
    }

    #[test]
    fn test_subtype_lowercased() {
        let mut p = valid();
        p.insert("vehicle_subtype".into(), " Рефрижератор ".into());
        let request = parse_query(&p).unwrap();
        assert_eq!(request.vehicle_subtype.as_deref(), Some("рефрижератор"));
    }

    #[test]
    fn test_blank_subtype_is_absent() {
        for blank in ["", "   "] {
            let mut p = valid();
            p.insert("vehicle_subtype".into(), blank.into());
            let request = parse_query(&p).unwrap();
            assert_eq!(request.vehicle_subtype, None, "{blank:?}");
        }
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for key in REQUIRED_PARAMS {
            let mut p = valid();
            p.remove(key);
            let err = parse_query(&p).unwrap_err();
            assert_eq!(err, Violation::MissingField { field: key });
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let p = params(&[("brand", "MAN")]);
        assert_eq!(
            parse_query(&p).unwrap_err(),
            Violation::MissingField { field: "vehicle_type" }
        );
    }

    #[test]
    fn test_type_conversion_failures() {
        for (key, bad) in [
            ("year", "twenty"),
            ("year", "2016.5"),
            ("downpayment", "ten percent"),
            ("downpayment", "NaN"),
            ("price", "5e6"),
            ("VAT_included", "maybe"),
        ] {
            let mut p = valid();
            p.insert(key.into(), bad.into());
            let err = parse_query(&p).unwrap_err();
            assert_eq!(err.kind(), ViolationKind::TypeConversion, "{key}={bad}");
            assert_eq!(err.field(), key);
        }
    }

    #[test]
    fn test_parse_bool() {
        for yes in ["yes", "TRUE", "1", " Yes "] {
            assert_eq!(parse_bool(yes), Some(true), "{yes}");
        }
        for no in ["no", "False", "0", "-1"] {
            assert_eq!(parse_bool(no), Some(false), "{no}");
        }
        assert_eq!(parse_bool("2"), None);
        assert_eq!(parse_bool(""), None);
    }
}
