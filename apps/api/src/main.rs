mod analysis;
mod config;
mod errors;
mod extraction;
mod generation;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{ResumeAnalyzer, Vocabulary};
use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize analyzer (built-in vocabulary unless ATS_VOCABULARY_PATH is set)
    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            info!("Loading vocabulary from {}", path.display());
            Vocabulary::from_toml_file(path)?
        }
        None => Vocabulary::default(),
    };
    let analyzer = Arc::new(ResumeAnalyzer::new(vocabulary));
    info!(
        "Analyzer ready ({} vocabulary terms)",
        analyzer.vocabulary().all_terms().count()
    );

    // Initialize LLM client (optional)
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let mut client = LlmClient::new(key.clone())?;
            if let Some(base_url) = &config.anthropic_base_url {
                info!("Using LLM endpoint {base_url}");
                client = client.with_base_url(base_url.as_str());
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; chat and resume generation are disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        analyzer,
        extractor: Arc::new(DocumentExtractor),
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
