//! Service layer
//!
//! Business logic between HTTP handlers and the store.

mod chirp;
mod moderation;
mod user;

pub use chirp::{ChirpService, MAX_CHIRP_LENGTH};
pub use moderation::{MASK, PROFANE_WORDS, clean_body};
pub use user::UserService;
