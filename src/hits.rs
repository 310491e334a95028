//! File server visit counter
//!
//! Counts requests to the static file route for the admin metrics page.
//! One instance is created per [`crate::AppState`], so tests get isolated
//! counters.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Atomic visit counter
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one visit
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Current number of visits
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Start counting from zero again
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}

/// Middleware that counts every request before forwarding it
///
/// # Usage
/// ```ignore
/// let files = Router::new()
///     .nest_service("/app", ServeDir::new("."))
///     .layer(middleware::from_fn_with_state(hits, count_hits));
/// ```
pub async fn count_hits(
    State(hits): State<Arc<HitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    hits.increment();
    next.run(request).await
}
