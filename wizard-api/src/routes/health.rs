//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    research_available: bool,
}

/// Health check handler
///
/// The server is healthy even without a research pipeline; the flag tells
/// the frontend whether the AI routes will respond.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let research_available = state.pipeline.is_some();

    let response = HealthResponse {
        status: "healthy".to_string(),
        research_available,
    };

    (StatusCode::OK, Json(response))
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}
