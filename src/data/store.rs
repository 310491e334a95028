//! Persistence gateway
//!
//! Everything above the data layer talks to storage through [`ChirpStore`].
//! Errors are opaque to callers: handlers map every [`StoreError`] to a 500.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{Chirp, User};

/// Failure reported by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQL driver or pool failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at connect time
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into a model
    #[error("corrupt row: {0}")]
    CorruptRow(#[from] uuid::Error),

    /// Constraint or backend failure outside SQL
    #[error("{0}")]
    Backend(String),
}

/// Read/write access to users and chirps
#[async_trait]
pub trait ChirpStore: Send + Sync {
    /// Insert a user with a fresh ID
    async fn create_user(&self, email: &str) -> Result<User, StoreError>;

    /// Insert a chirp owned by `user_id`
    ///
    /// Fails if `user_id` does not name an existing user.
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError>;

    /// All chirps, oldest first
    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError>;

    /// Look up a single chirp
    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError>;
}
