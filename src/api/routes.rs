//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{find_postal_code, healthcheck, list_postal_codes, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/healthcheck", get(healthcheck))
        // Lookup endpoints
        .route("/postal_code", get(list_postal_codes))
        .route("/postal_code/:zip_code", get(find_postal_code))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
