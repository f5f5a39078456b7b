//! # zkrelay — Binary Entry Point
//!
//! Starts the Axum HTTP server for the proof submission relay.
//! Binds to configurable port (default 4340).

use std::sync::Arc;

use zkrelay_api::state::{AppConfig, AppState};
use zkrelay_core::ProofSystem;
use zkrelay_relay::{CoordinatorConfig, SubmissionCoordinator};
use zkrelay_session::{open_session, RpcChannel, SessionConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env();
    let session_config = SessionConfig::from_env().map_err(|e| {
        tracing::error!("Session configuration failed: {e}");
        anyhow::anyhow!(e)
    })?;

    // One session per process, shared across submissions; the coordinator
    // serializes the submit-and-sign step.
    let session = open_session(&session_config).await.map_err(|e| {
        tracing::error!("Session establishment failed: {e}");
        anyhow::anyhow!(e)
    })?;

    let mut coordinator = SubmissionCoordinator::new(CoordinatorConfig::from_env());
    coordinator.register_channel(Arc::new(RpcChannel::new(session, ProofSystem::UltraPlonk)));

    let port = config.port;
    let state = AppState::new(config, coordinator);
    let app = zkrelay_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("zkrelay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
