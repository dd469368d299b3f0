mod config;
mod errors;
mod llm_client;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendation::catalog::Catalog;
use crate::recommendation::narration::{LlmNarrator, Narrator};
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

    info!("Starting EV recommendation API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    info!(
        "Catalog ready: {} manufacturers, {} entries",
        catalog.manufacturer_count(),
        catalog.entry_count()
    );

    let narrator = build_narrator(&config)?;

    let state = AppState {
        catalog: Arc::new(catalog),
        narrator,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Narration is enabled only when an API key is present.
fn build_narrator(config: &Config) -> Result<Option<Arc<dyn Narrator>>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("OPENAI_API_KEY not set; narration endpoint disabled");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key).context("Failed to build LLM client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let narrator: Arc<dyn Narrator> = Arc::new(LlmNarrator::new(llm));
    Ok(Some(narrator))
}
