//! Metrics collection and exposition.
//!
//! # Metrics
//! - `validarfc_requests_total` (counter): requests by endpoint, status
//! - `validarfc_request_duration_seconds` (histogram): latency by endpoint
//! - `validarfc_validations_total` (counter): identifiers checked, by outcome
//!
//! Without an installed recorder every call here is a no-op, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    let endpoint = endpoint.to_string();
    metrics::counter!(
        "validarfc_requests_total",
        "endpoint" => endpoint.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "validarfc_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one identifier check.
pub fn record_validation(is_valid: bool) {
    let outcome = if is_valid { "valid" } else { "invalid" };
    metrics::counter!("validarfc_validations_total", "outcome" => outcome).increment(1);
}
