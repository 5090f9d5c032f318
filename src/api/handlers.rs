//! HTTP API handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::dataset::PostalRecord;
use crate::store::PostalStore;

/// Default record count for the listing endpoint, as a raw query value.
const DEFAULT_LIMIT: &str = "10";

/// Application state shared with handlers.
///
/// The store is read-only after the startup load, so sharing it behind an
/// `Arc` needs no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded postal-code table.
    pub store: Arc<PostalStore>,
}

impl AppState {
    /// Wrap a loaded store for sharing across handlers.
    pub fn new(store: PostalStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Query parameters for the listing endpoint.
///
/// `limit` is kept as a raw string so an absent parameter and an invalid one
/// can be told apart; parsing happens in the handler.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of records to return. Defaults to "10".
    pub limit: Option<String>,
}

/// JSON error payload, `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Request-level errors mapped to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request input (e.g. a non-numeric limit).
    BadRequest(String),
    /// A well-formed lookup that matched zero rows. Never conflated with an
    /// internal error.
    NotFound,
    /// Any failure while querying the store during a request.
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::Internal(err) => {
                error!("request failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Health check handler - always returns 200 with body `ok`, independent of
/// dataset state.
pub async fn healthcheck() -> &'static str {
    "ok"
}

/// Listing handler - returns up to `limit` records in load order.
pub async fn list_postal_codes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PostalRecord>>, ApiError> {
    let raw = params.limit.as_deref().unwrap_or(DEFAULT_LIMIT);
    let limit: usize = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid limit: {raw}")))?;

    Ok(Json(state.store.list(limit).to_vec()))
}

/// Lookup handler - returns the first record matching the postal code, or
/// 404 when none does.
pub async fn find_postal_code(
    State(state): State<AppState>,
    Path(zip_code): Path<String>,
) -> Result<Json<PostalRecord>, ApiError> {
    match state.store.find_by_code(&zip_code) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(ApiError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("invalid limit: abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
