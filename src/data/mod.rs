//! Data layer module
//!
//! Handles all data persistence:
//! - Persistence gateway trait
//! - SQLite implementation
//! - In-memory implementation

mod database;
mod memory;
mod models;
mod store;

pub use database::Database;
pub use memory::MemoryStore;
pub use models::*;
pub use store::{ChirpStore, StoreError};
