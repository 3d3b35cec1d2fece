//! Service middleware for metrics and request tracking.
//!
//! ## Metrics Exposed
//!
//! - `request` - path, method, status and latency of every request
//! - `diagram` - records, nodes and edges per generated topology
//!
//! Metrics are emitted as tracing events under `topology_service::metrics`
//! and aggregated from logs.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Metrics middleware that records request counts and latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        target: "topology_service::metrics",
        metric_type = "request",
        path = %path,
        method = %method,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request_metric"
    );

    response
}

/// Record topology generation metrics.
pub fn record_diagram_metrics(record_count: usize, node_count: usize, edge_count: usize, latency_ms: u64) {
    info!(
        target: "topology_service::metrics",
        metric_type = "diagram",
        record_count = record_count,
        node_count = node_count,
        edge_count = edge_count,
        latency_ms = latency_ms,
        "diagram_metric"
    );
}

/// Record a rejected batch.
pub fn record_rejection(code: &str, record_index: usize) {
    info!(
        target: "topology_service::metrics",
        metric_type = "rejection",
        code = code,
        record_index = record_index,
        "rejection_metric"
    );
}
