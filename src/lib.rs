//! Chirpy - a small social-post REST API
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - /api: users and chirps (JSON)                            │
//! │  - /admin: visit counter report and reset                   │
//! │  - /app: static files, counted by the hits middleware       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                            │
//! │  - Content moderation                                       │
//! │  - Chirp validation                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - ChirpStore gateway                                       │
//! │  - SQLite (sqlx) or in-memory                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers and router pieces
//! - `service`: Business logic layer
//! - `data`: Persistence gateway and its implementations
//! - `hits`: File server visit counter
//! - `metrics`: Prometheus instruments
//! - `config`: Configuration management
//! - `error`: Error types

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod hits;
pub mod metrics;
pub mod service;

use std::sync::Arc;

/// Application state shared across all handlers
///
/// Cloned for each request. Everything mutable sits behind an `Arc`, and
/// nothing is a process-wide singleton, so tests can build isolated
/// instances with [`AppState::with_store`].
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Persistence gateway
    pub store: Arc<dyn data::ChirpStore>,

    /// File server visit counter
    pub hits: Arc<hits::HitCounter>,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects the store named by `database.url`.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or migrated
    pub async fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        tracing::info!("Initializing application state...");

        let store: Arc<dyn data::ChirpStore> = if config.database.is_memory() {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            Arc::new(data::MemoryStore::new())
        } else {
            let db =
                data::Database::connect(&config.database.url, config.database.max_connections)
                    .await?;
            Arc::new(db)
        };
        tracing::info!(memory = config.database.is_memory(), "Store ready");

        Ok(Self::with_store(config, store))
    }

    /// Build state around an existing store
    pub fn with_store(config: config::AppConfig, store: Arc<dyn data::ChirpStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            hits: Arc::new(hits::HitCounter::new()),
        }
    }

    pub fn chirp_service(&self) -> service::ChirpService {
        service::ChirpService::new(Arc::clone(&self.store))
    }

    pub fn user_service(&self) -> service::UserService {
        service::UserService::new(Arc::clone(&self.store))
    }
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::{Router, middleware};
    use tower_http::{
        compression::CompressionLayer, limit::RequestBodyLimitLayer, services::ServeDir,
        trace::TraceLayer,
    };

    let file_server = Router::new()
        .nest_service(
            "/app",
            ServeDir::new(&state.config.server.filepath_root),
        )
        .route_layer(middleware::from_fn(api::metrics::track_metrics))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.hits),
            hits::count_hits,
        ));

    Router::new()
        .nest("/api", api::api_router())
        .nest("/admin", api::admin_router())
        .route_layer(middleware::from_fn(api::metrics::track_metrics))
        .merge(file_server)
        .layer(RequestBodyLimitLayer::new(state.config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(api::metrics_router())
}
