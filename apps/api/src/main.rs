mod auth;
mod config;
mod errors;
mod insights;
mod jobs;
mod notify;
mod pipeline;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::AuthStore;
use crate::config::Config;
use crate::insights::MockAnalyzer;
use crate::jobs::JobStore;
use crate::notify::Notifier;
use crate::pipeline::CandidateStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::SessionStorage;

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

    info!("Starting HireHelp API v{}", env!("CARGO_PKG_VERSION"));

    // Restore any session persisted by a previous run
    let auth = AuthStore::new(SessionStorage::new(config.session_store_path.clone()));
    auth.restore();

    let notifier = Notifier::new();
    let jobs = JobStore::new(config.mock_latency);
    let candidates = CandidateStore::new(config.mock_latency, notifier.clone());
    info!(
        "Mock stores seeded (simulated latency: {:?})",
        config.mock_latency
    );

    // The analysis mock takes noticeably longer than a plain fetch
    let analyzer = Arc::new(MockAnalyzer::new(config.mock_latency * 4));

    let state = AppState {
        config: config.clone(),
        auth,
        jobs,
        candidates,
        notifier,
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
