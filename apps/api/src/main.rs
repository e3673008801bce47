mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::profile::ProfileExtractor;
use crate::extraction::vocabulary::SkillVocabulary;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::analyzer::RemoteAnalyzer;
use crate::screening::engine::ScreeningEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // One vocabulary instance feeds both the extractor and the fallback scorer
    let vocabulary = SkillVocabulary::builtin();
    let extractor = Arc::new(ProfileExtractor::new(vocabulary.clone()));

    // Screening engine: remote analyzer first, deterministic keyword fallback
    let analyzer = Arc::new(RemoteAnalyzer::new(llm));
    let engine = Arc::new(ScreeningEngine::new(analyzer, vocabulary));

    let state = AppState {
        db,
        extractor,
        engine,
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
