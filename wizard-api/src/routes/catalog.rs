//! Research category catalog endpoint

use axum::{response::Json, routing::get, Router};
use wizard_core::{ResearchCategory, RESEARCH_CATEGORIES};

use crate::AppState;

/// Return the fixed catalog of comparison criteria
async fn list_categories() -> Json<&'static [ResearchCategory]> {
    Json(RESEARCH_CATEGORIES)
}

/// Create catalog routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/research-categories", get(list_categories))
}
