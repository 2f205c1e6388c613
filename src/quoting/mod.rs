//! Quoting subsystem.
//!
//! # Data Flow
//! ```text
//! raw query map
//!     → params.rs (presence, types, normalization)
//!     → validator.rs (ordered business rules from rules.rs)
//!     → calculator.rs (VAT-inclusive payment math)
//!     → QuoteResult
//! ```
//!
//! # Design Decisions
//! - Exactly one violation per request, first failure wins
//! - Rule tables and pricing constants are data, loaded from config
//! - Everything here is synchronous and free of shared mutable state

pub mod calculator;
pub mod engine;
pub mod error;
pub mod params;
pub mod rules;
pub mod types;
pub mod validator;

pub use calculator::{Calculator, PricingConfig};
pub use engine::QuoteEngine;
pub use error::{Violation, ViolationKind};
pub use rules::{BrandGroups, FractionRange, IntRange, RuleSet};
pub use types::{Amount, QuoteRequest, QuoteResult};
