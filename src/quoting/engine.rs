//! Quote pipeline: normalize, validate, calculate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::quoting::calculator::{Calculator, PricingConfig};
use crate::quoting::error::Violation;
use crate::quoting::params::parse_query;
use crate::quoting::rules::RuleSet;
use crate::quoting::types::{QuoteRequest, QuoteResult};
use crate::quoting::validator::validate;

/// Engine for validating requests and producing quotes.
///
/// Cheap to clone; rule tables are shared and never mutated.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    rules: Arc<RuleSet>,
    calculator: Calculator,
}

impl QuoteEngine {
    /// Create a new quote engine.
    pub fn new(rules: RuleSet, pricing: PricingConfig) -> Self {
        Self {
            rules: Arc::new(rules),
            calculator: Calculator::new(pricing),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Quote from raw query parameters.
    pub fn quote_params(&self, params: &HashMap<String, String>) -> Result<QuoteResult, Violation> {
        let request = parse_query(params)?;
        self.quote(&request)
    }

    /// Quote an already normalized request.
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult, Violation> {
        validate(request, &self.rules)?;
        let result = self.calculator.calculate(request);

        tracing::info!(
            vehicle_type = %request.vehicle_type,
            brand = %request.brand,
            year = request.year,
            price = request.price,
            downpayment = request.downpayment,
            vat_included = request.vat_included,
            monthly_payment = result.monthly_payment.value,
            "Quote calculated"
        );

        Ok(result)
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(RuleSet::default(), PricingConfig::default())
    }
}
