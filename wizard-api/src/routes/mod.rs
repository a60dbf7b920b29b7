//! API route definitions

mod catalog;
mod health;
mod research;

use crate::AppState;
use axum::Router;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(research::routes())
        .merge(catalog::routes())
        .merge(health::routes())
}
