//! API layer
//!
//! HTTP handlers for:
//! - Users and chirps (JSON)
//! - Admin visit counter
//! - Metrics (Prometheus)

mod admin;
mod chirps;
mod dto;
mod extract;
pub mod metrics;
mod users;

pub use dto::*;
pub use extract::ApiJson;
pub use metrics::metrics_router;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::error::AppError;

/// Fallback for a known path hit with the wrong method
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn readiness() -> &'static str {
    "OK"
}

/// Create the JSON API router
///
/// Routes:
/// - GET /healthz - Readiness probe
/// - POST /users - Create user
/// - POST /chirps - Create chirp
/// - GET /chirps - List chirps
/// - GET /chirps/:chirp_id - Get chirp
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(readiness).fallback(method_not_allowed))
        .route(
            "/users",
            post(users::create_user).fallback(method_not_allowed),
        )
        .route(
            "/chirps",
            get(chirps::list_chirps)
                .post(chirps::create_chirp)
                .fallback(method_not_allowed),
        )
        .route(
            "/chirps/:chirp_id",
            get(chirps::get_chirp).fallback(method_not_allowed),
        )
}

/// Create admin router
///
/// Routes:
/// - GET /metrics - HTML visit report
/// - POST /reset - Reset the visit counter
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/metrics",
            get(admin::metrics_report).fallback(method_not_allowed),
        )
        .route(
            "/reset",
            post(admin::reset_metrics).fallback(method_not_allowed),
        )
}
