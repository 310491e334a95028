//! User service

use std::sync::Arc;

use crate::data::{ChirpStore, User};
use crate::error::Result;

/// User service
pub struct UserService {
    store: Arc<dyn ChirpStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn ChirpStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// The email is stored as given; the store rejects duplicates.
    pub async fn create(&self, email: &str) -> Result<User> {
        let user = self.store.create_user(email).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
