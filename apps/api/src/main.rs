mod config;
mod errors;
mod opportunities;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::opportunities::catalog::{CATALOG, TEMPLATES};
use crate::opportunities::recommender::HeuristicRecommender;
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

    info!("Starting Autonomy API v{}", env!("CARGO_PKG_VERSION"));

    // Static catalog is compiled in; nothing to load
    let recommender = Arc::new(HeuristicRecommender::new(CATALOG));
    info!(
        "Opportunity catalog: {} records, {} display templates, shortlist size {}",
        CATALOG.len(),
        TEMPLATES.len(),
        config.shortlist_size
    );

    let state = AppState {
        config: config.clone(),
        recommender,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
