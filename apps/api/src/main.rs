mod config;
mod documents;
mod errors;
mod llm_client;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::skills::source::{GeminiSkillSource, SkillSource};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillgap API v{}", env!("CARGO_PKG_VERSION"));

    // Model-backed skill source only when a key is configured; keyword scan otherwise
    let skill_source: Option<Arc<dyn SkillSource>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::with_base_url(key.clone(), config.gemini_api_url.clone());
            info!("Gemini skill source enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(GeminiSkillSource::new(client)))
        }
        None => {
            info!("No GEMINI_API_KEY set, using local keyword scan for skill extraction");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        skill_source,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
