//! API request and response DTOs
//!
//! Wire shapes for the JSON endpoints. Field names are snake_case and
//! stable regardless of how the store lays out its rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::{Chirp, User};

/// POST /api/users body
///
/// An absent `email` decodes as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
}

/// POST /api/chirps body
///
/// `user_id` stays a string here so a malformed value can be reported as
/// `Invalid user_id` rather than a JSON error. Absent fields decode as
/// empty strings and go through the same checks.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: String,
}

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
        }
    }
}

/// Chirp response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chirp_response_uses_snake_case_keys() {
        let chirp = Chirp::new("hello", Uuid::new_v4());
        let json = serde_json::to_value(ChirpResponse::from(chirp.clone())).unwrap();

        assert_eq!(json["id"], chirp.id.to_string());
        assert_eq!(json["user_id"], chirp.user_id.to_string());
        assert_eq!(json["body"], "hello");
        assert!(json.get("created_at").is_some());
        assert!(json.get("updated_at").is_some());
    }

    #[test]
    fn absent_request_fields_decode_as_empty() {
        let chirp = serde_json::from_str::<CreateChirpRequest>(r#"{"body":"hi"}"#).unwrap();
        assert_eq!(chirp.body, "hi");
        assert_eq!(chirp.user_id, "");

        let user = serde_json::from_str::<CreateUserRequest>("{}").unwrap();
        assert_eq!(user.email, "");
    }

    #[test]
    fn mistyped_request_fields_are_rejected() {
        let result = serde_json::from_str::<CreateChirpRequest>(r#"{"body":42}"#);
        assert!(result.is_err());
    }
}
