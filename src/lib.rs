//! Commercial vehicle financing quote service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod quoting;

pub use config::QuoterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use quoting::{QuoteEngine, QuoteRequest, QuoteResult, Violation};
