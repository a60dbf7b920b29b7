//! Research endpoints: vendor lookup, competitor suggestions, comparison

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use wizard_core::{ComparisonVendor, CompetitorSuggestion, VendorSummary, WizardError};

use crate::AppState;

/// Create research routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search-vendor", post(search_vendor))
        .route("/suggest-competitors", post(suggest_competitors))
        .route("/analyze-vendors", post(analyze_vendors))
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Map the error taxonomy onto HTTP status codes
///
/// Caller mistakes are 400, provider-side failures (unreachable endpoint,
/// empty or malformed content) are 502, and a missing credential is 503.
fn error_response(e: &WizardError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        WizardError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        WizardError::Provider(_)
        | WizardError::EmptyResponse
        | WizardError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        WizardError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn pipeline_unavailable() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "Research pipeline not available. Check the OPENAI_API_KEY environment variable."
                .to_string(),
        }),
    )
}

#[derive(Debug, Deserialize)]
struct SearchVendorRequest {
    #[serde(default)]
    url: Option<String>,
}

/// Resolve a vendor profile from a website URL
async fn search_vendor(
    State(state): State<AppState>,
    Json(request): Json<SearchVendorRequest>,
) -> impl IntoResponse {
    let url = match request.url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => url.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "URL is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Resolving vendor for {}", url);

    let pipeline = match &state.pipeline {
        Some(pipeline) => pipeline,
        None => return pipeline_unavailable().into_response(),
    };

    match pipeline.resolve_vendor(&url).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => {
            error!("Failed to resolve vendor {}: {}", url, e);
            error_response(&e).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestCompetitorsRequest {
    #[serde(default)]
    vendor: Option<VendorBody>,
}

/// Vendor details as submitted by the wizard; validated into a
/// `VendorSummary` before reaching the pipeline
#[derive(Debug, Deserialize)]
struct VendorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct CompetitorsResponse {
    competitors: Vec<CompetitorSuggestion>,
}

/// Suggest up to 3 competitors for a loaded vendor
async fn suggest_competitors(
    State(state): State<AppState>,
    Json(request): Json<SuggestCompetitorsRequest>,
) -> impl IntoResponse {
    let vendor = match request.vendor {
        Some(VendorBody {
            name: Some(name),
            description: Some(description),
            industry,
            url,
        }) if !name.trim().is_empty() && !description.trim().is_empty() => VendorSummary {
            name,
            description,
            industry,
            url: url.unwrap_or_default(),
        },
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Vendor information is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Suggesting competitors for {}", vendor.name);

    let pipeline = match &state.pipeline {
        Some(pipeline) => pipeline,
        None => return pipeline_unavailable().into_response(),
    };

    match pipeline.suggest_competitors(&vendor).await {
        Ok(competitors) => (StatusCode::OK, Json(CompetitorsResponse { competitors })).into_response(),
        Err(e) => {
            error!("Failed to suggest competitors for {}: {}", vendor.name, e);
            error_response(&e).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeVendorsRequest {
    #[serde(default)]
    vendors: Vec<ComparisonVendor>,
    #[serde(default)]
    research_categories: Vec<String>,
}

/// Compare vendors across the selected categories into a final report
///
/// Empty inputs surface as 400 from the pipeline's precondition checks,
/// before any completion call is spent.
async fn analyze_vendors(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeVendorsRequest>,
) -> impl IntoResponse {
    info!(
        "Analyzing {} vendors across {} categories",
        request.vendors.len(),
        request.research_categories.len()
    );

    let pipeline = match &state.pipeline {
        Some(pipeline) => pipeline,
        None => return pipeline_unavailable().into_response(),
    };

    match pipeline
        .compare_vendors(&request.vendors, &request.research_categories)
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Failed to analyze vendors: {}", e);
            error_response(&e).into_response()
        }
    }
}
