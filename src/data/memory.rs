//! In-memory store
//!
//! Volatile [`ChirpStore`] that mirrors the SQLite constraints (unique
//! email, chirp owner must exist). Used by tests and by `database.url =
//! "memory"`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Chirp, User};
use super::store::{ChirpStore, StoreError};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Insertion order is the listing order
    chirps: Vec<Chirp>,
}

/// Process-local store backed by hash maps
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChirpStore for MemoryStore {
    async fn create_user(&self, email: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|user| user.email == email) {
            return Err(StoreError::Backend(format!(
                "email already registered: {email}"
            )));
        }

        let user = User::new(email);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::Backend(format!("unknown user: {user_id}")));
        }

        let chirp = Chirp::new(body, user_id);
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        Ok(self.tables.read().await.chirps.clone())
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.chirps.iter().find(|chirp| chirp.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let store = MemoryStore::new();
        store.create_user("walt@breakingbad.com").await.unwrap();

        let result = store.create_user("walt@breakingbad.com").await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn rejects_chirp_for_unknown_user() {
        let store = MemoryStore::new();

        let result = store.create_chirp("hello", Uuid::new_v4()).await;
        assert!(result.is_err());
        assert!(store.list_chirps().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_chirps_in_creation_order() {
        let store = MemoryStore::new();
        let user = store.create_user("saul@bettercall.com").await.unwrap();

        let first = store.create_chirp("first", user.id).await.unwrap();
        let second = store.create_chirp("second", user.id).await.unwrap();

        let chirps = store.list_chirps().await.unwrap();
        assert_eq!(chirps, vec![first.clone(), second]);
        assert_eq!(store.get_chirp(first.id).await.unwrap(), Some(first));
        assert_eq!(store.get_chirp(Uuid::new_v4()).await.unwrap(), None);
    }
}
