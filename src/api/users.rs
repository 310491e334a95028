//! User endpoints

use axum::{Json, extract::State, http::StatusCode};

use super::dto::{CreateUserRequest, UserResponse};
use super::extract::ApiJson;
use crate::AppState;
use crate::error::Result;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service().create(&req.email).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
