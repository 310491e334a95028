//! Common test utilities for E2E tests

use std::sync::Arc;

use chirpy::{AppState, config, data::MemoryStore};
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _static_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a new test server backed by an in-memory store
    pub async fn new() -> Self {
        // Static root with a page to serve under /app
        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<html><body>Welcome to Chirpy</body></html>",
        )
        .unwrap();

        let config = config::AppConfig {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
                filepath_root: static_dir.path().to_path_buf(),
                max_body_bytes: 64 * 1024,
            },
            database: config::DatabaseConfig {
                url: config::MEMORY_DATABASE_URL.to_string(),
                max_connections: 1,
            },
            platform: "dev".to_string(),
            logging: config::LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        };

        let state = AppState::with_store(config, Arc::new(MemoryStore::new()));

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        let app = chirpy::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: addr_str,
            state,
            _static_dir: static_dir,
            client,
        }
    }

    /// Get base URL for requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Create a user through the API and return its JSON record
    pub async fn create_user(&self, email: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
        response.json().await.unwrap()
    }

    /// Create a chirp through the API and return the raw response
    pub async fn post_chirp(&self, body: &str, user_id: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/chirps"))
            .json(&serde_json::json!({ "body": body, "user_id": user_id }))
            .send()
            .await
            .unwrap()
    }
}
