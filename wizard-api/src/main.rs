//! Vendor Comparison Wizard API Server
//!
//! HTTP API server backing the multi-step wizard: vendor lookup, competitor
//! suggestions, and AI-generated comparison reports.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wizard_research::{OpenAiCompletion, ResearchPipeline};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Research pipeline (optional - requires OPENAI_API_KEY)
    pub pipeline: Option<Arc<ResearchPipeline>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,wizard_api=debug")),
        )
        .init();

    info!("Starting Vendor Comparison Wizard API");

    // Initialize the research pipeline (optional - may fail if the API key is not set)
    let pipeline = match OpenAiCompletion::from_env() {
        Ok(mut client) => {
            if let Ok(model) = std::env::var("OPENAI_MODEL") {
                client = client.with_model(&model);
            }
            if let Some(secs) = std::env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                client = client.with_timeout(Duration::from_secs(secs));
            }
            info!("Research pipeline initialized successfully");
            Some(Arc::new(ResearchPipeline::new(Arc::new(client))))
        }
        Err(e) => {
            info!(
                "Research pipeline not available: {}. Set OPENAI_API_KEY to enable.",
                e
            );
            None
        }
    };

    let state = AppState { pipeline };

    // Configure CORS for the wizard frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build router
    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
