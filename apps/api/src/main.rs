mod config;
mod errors;
mod extraction;
mod fetcher;
mod job_parser;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{default_site_profiles, TextExtractor};
use crate::fetcher::PageFetcher;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobparse v{}", env!("CARGO_PKG_VERSION"));

    if config.groq_api_key.is_empty() {
        warn!("GROQ_API_KEY is not set; /parse-job requests will fail at the LLM call");
    }

    let llm = LlmClient::new(config.llm())?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm.model(),
        config.llm_api_url
    );

    let fetcher = PageFetcher::new(Duration::from_secs(config.fetch_timeout_secs))?;

    let extractor = Arc::new(TextExtractor::new(
        default_site_profiles(),
        config.max_content_chars,
    ));
    info!("Text extractor budget: {} chars", extractor.max_chars());

    let state = AppState {
        llm,
        fetcher,
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running at http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
