//! Attestation network session configuration.
//!
//! Built once from the environment and passed explicitly to
//! [`open_session`](crate::session::open_session). Replaces the fluent
//! builder pattern of SDK clients with a plain struct — configuration is
//! visible at the call site and carries no hidden mutable state.

use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Account seed phrase for the attestation network.
///
/// Redacted in `Debug` output and zeroized when dropped, so the credential
/// neither leaks into logs nor lingers in freed memory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed(String);

impl SecretSeed {
    /// Wrap a seed phrase.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Access the seed for session establishment.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretSeed([REDACTED])")
    }
}

/// Configuration for connecting to the attestation network.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RPC endpoint of the attestation network.
    pub rpc_endpoint: Url,
    /// Account seed phrase (the signing identity for submissions).
    pub seed: SecretSeed,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ZKV_RPC_URL` (required)
    /// - `ZKV_SEED_PHRASE` (required)
    /// - `ZKV_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_endpoint =
            std::env::var("ZKV_RPC_URL").map_err(|_| ConfigError::MissingVar("ZKV_RPC_URL"))?;
        let rpc_endpoint = Url::parse(&raw_endpoint)
            .map_err(|e| ConfigError::InvalidUrl("ZKV_RPC_URL".to_string(), e.to_string()))?;
        let seed = std::env::var("ZKV_SEED_PHRASE")
            .map_err(|_| ConfigError::MissingVar("ZKV_SEED_PHRASE"))?;

        Ok(Self {
            rpc_endpoint,
            seed: SecretSeed::new(seed),
            timeout_secs: std::env::var("ZKV_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    /// An endpoint variable did not parse as a URL.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_debug_is_redacted() {
        let seed = SecretSeed::new("abandon abandon about");
        let debug = format!("{seed:?}");
        assert!(!debug.contains("abandon"), "seed leaked: {debug}");
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn config_debug_redacts_seed() {
        let config = SessionConfig {
            rpc_endpoint: Url::parse("wss://testnet-rpc.example.net").unwrap(),
            seed: SecretSeed::new("abandon abandon about"),
            timeout_secs: 30,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("abandon"), "seed leaked: {debug}");
    }

    #[test]
    fn from_env_requires_rpc_url() {
        std::env::remove_var("ZKV_RPC_URL");
        let err = SessionConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("ZKV_RPC_URL"));
    }
}
