//! Data models
//!
//! Domain entities returned by the persistence gateway.
//! IDs are UUID v4 and timestamps are chrono UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// User
// =============================================================================

/// An account that can author chirps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Uniqueness is enforced by the store
    pub email: String,
}

impl User {
    /// Build a fresh user record with a new ID and matching timestamps
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
        }
    }
}

// =============================================================================
// Chirp
// =============================================================================

/// A short text post
///
/// The body stored here has already been through the content filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    /// Owning user
    pub user_id: Uuid,
}

impl Chirp {
    /// Build a fresh chirp record with a new ID and matching timestamps
    pub fn new(body: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.into(),
            user_id,
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

/// `chirps` row as stored in SQLite
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct ChirpRow {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: String,
}

impl TryFrom<ChirpRow> for Chirp {
    type Error = uuid::Error;

    fn try_from(row: ChirpRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&row.id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            user_id: Uuid::parse_str(&row.user_id)?,
        })
    }
}
