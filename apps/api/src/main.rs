mod agent;
mod config;
mod cost;
mod cvs;
mod engine;
mod errors;
mod matcher;
mod models;
mod prompts;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::AgentClient;
use crate::config::Config;
use crate::cost::CostTracker;
use crate::cvs::CvStore;
use crate::prompts::PromptStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matcher API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Rating range: {} (CV dir: {})",
        config.rating.description(),
        config.cv_dir.display()
    );

    // Initialize the chat agent client
    let agent = Arc::new(AgentClient::new(config.agent_api_key.clone()));
    info!("Agent client initialized (model: {})", agent::MODEL);

    // Build app state
    let state = AppState {
        agent,
        prompts: Arc::new(PromptStore::new()),
        cvs: Arc::new(CvStore::new(config.cv_dir.clone())),
        cost: Arc::new(CostTracker::new(config.pricing.clone())),
        config: config.clone(),
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
