//! Request extractors

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that reports every decode failure as `Invalid JSON`
///
/// Unlike `axum::Json` it does not look at `Content-Type`; any body that
/// parses is accepted.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "Failed to read request body");
            AppError::InvalidJson
        })?;

        serde_json::from_slice(&bytes).map(ApiJson).map_err(|error| {
            tracing::debug!(%error, "Error decoding JSON");
            AppError::InvalidJson
        })
    }
}
