//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The state holds exactly two things: the relay configuration and the
//! submission coordinator. There is no database pool and no cache — every
//! submission is transient, and all durable state lives on the attestation
//! network.

use std::sync::Arc;

use zkrelay_relay::SubmissionCoordinator;

/// Relay HTTP configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Inbound listen port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `RELAY_PORT` (default: 4340)
    pub fn from_env() -> Self {
        let port = std::env::var("RELAY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(4340);
        Self { port }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration.
    pub config: AppConfig,
    /// The submission coordinator servicing `/verify`.
    pub coordinator: Arc<SubmissionCoordinator>,
}

impl AppState {
    /// Assemble application state.
    pub fn new(config: AppConfig, coordinator: SubmissionCoordinator) -> Self {
        Self {
            config,
            coordinator: Arc::new(coordinator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_4340() {
        std::env::remove_var("RELAY_PORT");
        let config = AppConfig::from_env();
        assert_eq!(config.port, 4340);
    }
}
