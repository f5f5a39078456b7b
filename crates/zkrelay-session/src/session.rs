//! Session establishment against the attestation network.
//!
//! [`open_session`] takes an explicit [`SessionConfig`] and returns a
//! [`SessionContext`]: a credentialed, reusable connection handle. The
//! context is shared across submissions; the coordinator serializes the
//! submit-and-sign step so concurrent submissions cannot collide on the
//! account's nonce ordering.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::rpc::{rpc_call, RpcFailure, AUTH_REJECTED_CODE};

/// Parameters for the `session_open` call.
#[derive(serde::Serialize)]
struct OpenParams<'a> {
    seed: &'a str,
}

/// Result of the `session_open` call.
#[derive(serde::Deserialize)]
struct OpenResult {
    account: String,
}

/// A live, credentialed connection to the attestation network.
///
/// Holds the HTTP client, the endpoint, and the network-assigned account
/// identity. Cloneable and cheap to share (`Arc` internals via reqwest).
#[derive(Debug, Clone)]
pub struct SessionContext {
    http: reqwest::Client,
    endpoint: Arc<Url>,
    account: Arc<str>,
}

impl SessionContext {
    /// The HTTP client bound to this session.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The attestation network endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The network-assigned account identity for this session.
    pub fn account(&self) -> &str {
        &self.account
    }
}

/// Establish a session with the attestation network.
///
/// Registers the account credential with the network and returns a context
/// reusable across many submissions.
///
/// # Errors
///
/// [`SessionError::Connection`] if the endpoint is unreachable,
/// [`SessionError::Auth`] if the network rejects the credential.
pub async fn open_session(config: &SessionConfig) -> Result<SessionContext, SessionError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| SessionError::Connection(e.to_string()))?;

    let result: OpenResult = rpc_call(
        &http,
        &config.rpc_endpoint,
        "session_open",
        OpenParams {
            seed: config.seed.expose(),
        },
    )
    .await
    .map_err(session_error_from)?;

    tracing::info!(account = %result.account, "attestation network session established");

    Ok(SessionContext {
        http,
        endpoint: Arc::new(config.rpc_endpoint.clone()),
        account: Arc::from(result.account),
    })
}

/// Translate a `session_open` RPC failure into the session error taxonomy.
///
/// The network signals a rejected credential with a dedicated RPC error
/// code; everything else is a connection-level failure.
fn session_error_from(failure: RpcFailure) -> SessionError {
    match failure {
        RpcFailure::Rpc { code, message } if code == AUTH_REJECTED_CODE => {
            SessionError::Auth(message)
        }
        RpcFailure::Rpc { message, .. } => SessionError::Connection(message),
        RpcFailure::Transport(detail) | RpcFailure::Decode(detail) => {
            SessionError::Connection(detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretSeed;

    #[test]
    fn auth_rejected_code_maps_to_auth_error() {
        let err = session_error_from(RpcFailure::Rpc {
            code: AUTH_REJECTED_CODE,
            message: "seed not recognized".to_string(),
        });
        assert!(matches!(err, SessionError::Auth(_)), "got: {err}");
        assert!(err.to_string().contains("seed not recognized"));
    }

    #[test]
    fn other_rpc_codes_map_to_connection_error() {
        let err = session_error_from(RpcFailure::Rpc {
            code: -32000,
            message: "node overloaded".to_string(),
        });
        assert!(matches!(err, SessionError::Connection(_)), "got: {err}");
    }

    #[test]
    fn transport_and_decode_failures_map_to_connection_error() {
        let transport = session_error_from(RpcFailure::Transport("refused".to_string()));
        assert!(matches!(transport, SessionError::Connection(_)));

        let decode = session_error_from(RpcFailure::Decode("truncated body".to_string()));
        assert!(matches!(decode, SessionError::Connection(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_connection_error() {
        // Port 1 on localhost refuses connections.
        let config = SessionConfig {
            rpc_endpoint: Url::parse("http://127.0.0.1:1").unwrap(),
            seed: SecretSeed::new("test seed"),
            timeout_secs: 1,
        };
        let err = open_session(&config).await.unwrap_err();
        assert!(matches!(err, SessionError::Connection(_)), "got: {err}");
    }
}
