//! Chirp service
//!
//! Validates and filters chirp bodies, then hands them to the store.

use std::sync::Arc;

use uuid::Uuid;

use super::moderation::clean_body;
use crate::data::{Chirp, ChirpStore};
use crate::error::{AppError, Result};
use crate::metrics::{CHIRPS_CENSORED_TOTAL, CHIRPS_CREATED_TOTAL};

/// Longest allowed filtered body, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp service
pub struct ChirpService {
    store: Arc<dyn ChirpStore>,
}

impl ChirpService {
    /// Create new chirp service
    pub fn new(store: Arc<dyn ChirpStore>) -> Self {
        Self { store }
    }

    /// Create a new chirp
    ///
    /// # Arguments
    /// * `body` - Raw body as sent by the client
    /// * `user_id` - Owner ID, still unparsed
    ///
    /// # Errors
    /// `Validation` if the filtered body is too long or `user_id` is not a
    /// UUID; `Store` if the insert fails. Nothing is stored on error.
    pub async fn create(&self, body: &str, user_id: &str) -> Result<Chirp> {
        let cleaned = clean_body(body);

        if cleaned.chars().count() > MAX_CHIRP_LENGTH {
            return Err(AppError::Validation("Chirp is too long".to_string()));
        }

        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::Validation("Invalid user_id".to_string()))?;

        let chirp = self.store.create_chirp(&cleaned, user_id).await?;

        CHIRPS_CREATED_TOTAL.inc();
        if cleaned != body.to_lowercase() {
            CHIRPS_CENSORED_TOTAL.inc();
        }
        tracing::info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "Chirp created");

        Ok(chirp)
    }

    /// All chirps in store order
    pub async fn list(&self) -> Result<Vec<Chirp>> {
        Ok(self.store.list_chirps().await?)
    }

    /// Fetch one chirp by its path-supplied ID
    ///
    /// A malformed ID is reported as not found, same as a missing chirp.
    pub async fn get(&self, id: &str) -> Result<Chirp> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::NotFound("Invalid chirp id".to_string()))?;

        self.store
            .get_chirp(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))
    }
}
