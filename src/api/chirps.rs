//! Chirp endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::dto::{ChirpResponse, CreateChirpRequest};
use super::extract::ApiJson;
use crate::AppState;
use crate::error::Result;

/// POST /api/chirps
///
/// The body is filtered before the length check, so masking can bring an
/// over-long body under the limit but never over it.
pub async fn create_chirp(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>)> {
    let chirp = state
        .chirp_service()
        .create(&req.body, &req.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

/// GET /api/chirps
pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChirpResponse>>> {
    let chirps = state.chirp_service().list().await?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// GET /api/chirps/:chirp_id
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>> {
    let chirp = state.chirp_service().get(&chirp_id).await?;

    Ok(Json(chirp.into()))
}
