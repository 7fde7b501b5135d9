//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency by method, route
//! - `catalog_records` (gauge): number of records served
//! - `search_outcomes_total` (counter): searches by outcome (results, fallback)
//!
//! Without an installed recorder every call here is a no-op.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the size of the catalog being served.
pub fn record_catalog_size(records: usize) {
    ::metrics::gauge!("catalog_records").set(records as f64);
}

/// Record whether a search produced results or fell back to suggestions.
pub fn record_search_outcome(fallback: bool) {
    let outcome = if fallback { "fallback" } else { "results" };
    ::metrics::counter!("search_outcomes_total", "outcome" => outcome).increment(1);
}

/// Middleware recording `http_requests_total` and latency per matched route.
///
/// Installed with `route_layer`, so only requests that matched a route reach it.
pub async fn track_requests(route: MatchedPath, request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, route.as_str(), response.status().as_u16(), start);
    response
}
