//! Loan payment calculation.
//!
//! All outputs are restated VAT-inclusive. Amounts are truncated toward
//! zero to whole currency units.

use serde::{Deserialize, Serialize};

use crate::quoting::types::{Amount, QuoteRequest, QuoteResult};

/// Financing constants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Base annual rate before margin.
    pub base_rate: f64,

    /// VAT rate applied to price and to the rate.
    pub vat_rate: f64,

    /// Amortization term in months.
    pub periods: u32,

    /// Down-payments strictly below this use `low_downpayment_margin`.
    pub margin_threshold: f64,

    pub low_downpayment_margin: f64,

    pub standard_margin: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rate: 0.13,
            vat_rate: 0.20,
            periods: 48,
            margin_threshold: 0.10,
            low_downpayment_margin: 0.10,
            standard_margin: 0.07,
        }
    }
}

/// Computes quotes for already validated requests.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pricing: PricingConfig,
}

impl Calculator {
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Risk margin for a down-payment fraction.
    pub fn margin(&self, downpayment: f64) -> f64 {
        if downpayment < self.pricing.margin_threshold {
            self.pricing.low_downpayment_margin
        } else {
            self.pricing.standard_margin
        }
    }

    /// Effective annual rate, VAT-inclusive.
    pub fn annual_rate(&self, downpayment: f64) -> f64 {
        (self.pricing.base_rate + self.margin(downpayment)) * (1.0 + self.pricing.vat_rate)
    }

    /// Gross a price up to VAT-inclusive terms.
    pub fn price_with_vat(&self, price: i64, vat_included: bool) -> f64 {
        if vat_included {
            price as f64
        } else {
            price as f64 * (1.0 + self.pricing.vat_rate)
        }
    }

    /// Calculate the quote. The request must already have passed validation.
    pub fn calculate(&self, request: &QuoteRequest) -> QuoteResult {
        let price_vat = self.price_with_vat(request.price, request.vat_included);
        let principal = price_vat * (1.0 - request.downpayment);
        let monthly_rate = self.annual_rate(request.downpayment) / 12.0;
        let payment = level_payment(monthly_rate, self.pricing.periods, principal);

        QuoteResult {
            downpayment: Amount::with_vat((request.downpayment * price_vat) as i64),
            monthly_payment: Amount::with_vat(payment.abs() as i64),
        }
    }
}

/// Level payment that amortizes `principal` over `periods` at `rate` per period.
pub fn level_payment(rate: f64, periods: u32, principal: f64) -> f64 {
    let n = periods as f64;
    if rate == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + rate).powf(n);
    principal * rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(price: i64, downpayment: f64, vat_included: bool) -> QuoteRequest {
        QuoteRequest {
            vehicle_type: "semitrailer".to_string(),
            vehicle_subtype: None,
            brand: "GRUNWALD".to_string(),
            year: 2016,
            price,
            downpayment,
            vat_included,
        }
    }

    #[test]
    fn test_known_quote() {
        let calc = Calculator::default();
        let result = calc.calculate(&request(5_000_000, 0.1, true));
        // rate = (0.13 + 0.07) * 1.2 = 0.24, principal = 4.5M
        let expected = level_payment(0.24 / 12.0, 48, 4_500_000.0) as i64;
        assert_eq!(result.monthly_payment.value, expected);
        assert!((146_000..=147_000).contains(&expected), "{expected}");
        assert_eq!(result.downpayment.value, 500_000);
        assert!(result.monthly_payment.vat_included);
        assert!(result.downpayment.vat_included);
    }

    #[test]
    fn test_vat_exclusive_price_is_grossed_up() {
        let calc = Calculator::default();
        let result = calc.calculate(&request(5_000_000, 0.2, false));
        assert_eq!(result.downpayment.value, 1_200_000);
    }

    #[test]
    fn test_margin_step() {
        let calc = Calculator::default();
        assert_eq!(calc.margin(0.09), 0.10);
        assert_eq!(calc.margin(0.10), 0.07);
        assert!(calc.annual_rate(0.09) > calc.annual_rate(0.10));

        let below = calc.calculate(&request(5_000_000, 0.09, true));
        let at = calc.calculate(&request(5_000_000, 0.10, true));
        assert!(at.monthly_payment.value < below.monthly_payment.value);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(level_payment(0.0, 48, 4_800.0), 100.0);
    }

    #[test]
    fn test_level_payment_amortizes_principal() {
        let rate = 0.02;
        let payment = level_payment(rate, 48, 1_000_000.0);
        let mut balance = 1_000_000.0;
        for _ in 0..48 {
            balance = balance * (1.0 + rate) - payment;
        }
        assert!(balance.abs() < 1e-3, "{balance}");
    }

    fn price() -> impl Strategy<Value = i64> {
        1_000_000i64..=20_000_000
    }

    fn downpayment() -> impl Strategy<Value = f64> {
        0.0f64..0.5
    }

    proptest! {
        #[test]
        fn prop_outputs_positive(p in price(), dp in downpayment(), vat in any::<bool>()) {
            let result = Calculator::default().calculate(&request(p, dp, vat));
            prop_assert!(result.monthly_payment.value > 0);
            prop_assert!(result.downpayment.value >= 0);
            prop_assert!(result.monthly_payment.vat_included);
            prop_assert!(result.downpayment.vat_included);
        }

        #[test]
        fn prop_monotonic_in_price(a in price(), b in price(), dp in downpayment(), vat in any::<bool>()) {
            let calc = Calculator::default();
            let pay_a = calc.calculate(&request(a, dp, vat)).monthly_payment.value;
            let pay_b = calc.calculate(&request(b, dp, vat)).monthly_payment.value;
            if a >= b {
                prop_assert!(pay_a >= pay_b);
            } else {
                prop_assert!(pay_a <= pay_b);
            }
        }

        #[test]
        fn prop_vat_exclusive_costs_more(p in price(), dp in downpayment()) {
            let calc = Calculator::default();
            let with_vat = calc.calculate(&request(p, dp, true)).monthly_payment.value;
            let without_vat = calc.calculate(&request(p, dp, false)).monthly_payment.value;
            prop_assert!(without_vat > with_vat);
        }
    }
}
