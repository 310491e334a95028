//! SQLite database operations
//!
//! The production [`ChirpStore`]. Uses SQLx with migrations from
//! `./migrations`, applied on connect.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use super::models::{Chirp, ChirpRow, User};
use super::store::{ChirpStore, StoreError};
use crate::metrics::DB_QUERIES_TOTAL;

fn record_query(operation: &str, table: &str) {
    DB_QUERIES_TOTAL
        .with_label_values(&[operation, table])
        .inc();
}

/// Database connection pool wrapper
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    // =========================================================================
    // Connection
    // =========================================================================

    /// Connect to SQLite database
    ///
    /// Creates the database file if it doesn't exist, turns on foreign key
    /// enforcement and runs pending migrations.
    ///
    /// # Arguments
    /// * `url` - SQLx connection string, e.g. `sqlite:chirpy.db?mode=rwc`
    /// * `max_connections` - Pool size
    ///
    /// # Errors
    /// Returns error if the URL is invalid, or connection or migration fails
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            StoreError::from(e)
        })?;

        tracing::info!("Database connected and migrated successfully");

        Ok(Self { pool })
    }
}

#[async_trait]
impl ChirpStore for Database {
    // =========================================================================
    // Users
    // =========================================================================

    async fn create_user(&self, email: &str) -> Result<User, StoreError> {
        let user = User::new(email);

        sqlx::query(
            r#"
            INSERT INTO users (id, created_at, updated_at, email)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;
        record_query("INSERT", "users");

        Ok(user)
    }

    // =========================================================================
    // Chirps
    // =========================================================================

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let chirp = Chirp::new(body, user_id);

        sqlx::query(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(chirp.id.to_string())
        .bind(chirp.created_at)
        .bind(chirp.updated_at)
        .bind(&chirp.body)
        .bind(chirp.user_id.to_string())
        .execute(&self.pool)
        .await?;
        record_query("INSERT", "chirps");

        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        let rows = sqlx::query_as::<_, ChirpRow>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        record_query("SELECT", "chirps");

        rows.into_iter()
            .map(|row| Chirp::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;
        record_query("SELECT", "chirps");

        row.map(Chirp::try_from).transpose().map_err(StoreError::from)
    }
}

