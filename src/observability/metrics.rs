//! Metrics collection and exposition.
//!
//! # Metrics
//! - `quoter_requests_total` (counter): requests by endpoint, status
//! - `quoter_request_duration_seconds` (histogram): latency by endpoint
//! - `quoter_violations_total` (counter): rejected quotes by violation kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::quoting::ViolationKind;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "quoter_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "quoter_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a rejected quote.
pub fn record_violation(kind: ViolationKind) {
    metrics::counter!("quoter_violations_total", "kind" => kind.as_str()).increment(1);
}
