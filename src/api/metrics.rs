//! Prometheus metrics endpoint
//!
//! Exposes operational metrics in Prometheus format, plus the middleware
//! that feeds the HTTP request instruments.

use std::time::Instant;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus::{Encoder, TextEncoder};

use crate::error::{AppError, Result};
use crate::metrics::{REGISTRY, observe_request};

/// Metrics endpoint handler
///
/// Returns all metrics in Prometheus text format.
async fn metrics_handler() -> Result<Response> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let metrics_text = encoder.encode_to_string(&metric_families).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to encode metrics: {}", e))
    })?;

    Ok((
        [(axum::http::header::CONTENT_TYPE, encoder.format_type())],
        metrics_text,
    )
        .into_response())
}

/// Record count and latency for every routed request
///
/// Labelled by route template so IDs in paths don't explode cardinality.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let started = Instant::now();
    let response = next.run(request).await;

    observe_request(
        &method,
        &endpoint,
        response.status().as_u16(),
        started.elapsed(),
    );

    response
}

/// Create metrics router
///
/// Exposes the `/metrics` endpoint.
pub fn metrics_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(metrics_handler))
}
