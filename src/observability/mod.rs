//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the quote engine produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON or pretty)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the trace span
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
