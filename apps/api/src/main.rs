mod analysis;
mod config;
mod errors;
mod extraction;
mod jobs;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::strategy::AnalysisOrchestrator;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::jobs::JobSearchClient;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (all credentials are optional)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeLens API v{}", env!("CARGO_PKG_VERSION"));

    // Probe which extraction tiers the host can run (poppler / tesseract)
    let extractor = Arc::new(TextExtractor::probe());

    // The external-model path joins the chain only when a credential is set
    let model_client = config.google_api_key.clone().map(GeminiClient::new);
    match &model_client {
        Some(_) => info!("Model client initialized (model: {})", llm_client::MODEL),
        None => info!("GOOGLE_API_KEY not set; analysis uses local strategies only"),
    }

    let analyzer = Arc::new(AnalysisOrchestrator::new(model_client));

    // Job-search proxy degrades to empty listings without a key
    let jobs = JobSearchClient::new(config.rapidapi_key.clone());
    if config.rapidapi_key.is_none() {
        info!("RAPIDAPI_KEY not set; job recommendations will be empty");
    }

    // Build app state
    let state = AppState {
        extractor,
        analyzer,
        jobs,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
