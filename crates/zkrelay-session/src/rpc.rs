//! JSON-RPC channel to the attestation network.
//!
//! [`RpcChannel`] submits a proof over the session's HTTP client and then
//! polls the network for the terminal event. Polling sleeps on the tokio
//! timer between probes — a suspension, not a blocked thread — with the
//! interval backing off to a cap so long waits do not hammer the endpoint.
//!
//! The wire protocol is three methods:
//! - `session_open { seed } -> { account }` (used by the session manager),
//! - `proof_submit { account, proofSystem, vk, proof, publicSignals } -> { txHash }`,
//! - `proof_status { txHash } -> { status, attestation?, reason? }` where
//!   `status` is `pending`, `attested`, or `rejected`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use zkrelay_core::{ProofBundle, ProofSystem, TxReference, WireProofBundle};

use crate::channel::{AttestationChannel, AttestationOutcome};
use crate::error::NetworkError;
use crate::session::SessionContext;

/// RPC error code the network uses for a rejected credential.
pub(crate) const AUTH_REJECTED_CODE: i64 = -32001;

/// Starting interval between status probes.
const INITIAL_POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Probe interval cap.
const MAX_POLL_INTERVAL: Duration = Duration::from_secs(5);

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Failure of a single RPC call, before translation into domain errors.
#[derive(Debug)]
pub(crate) enum RpcFailure {
    /// Request never completed (connect, timeout, TLS).
    Transport(String),
    /// The network answered with an RPC-level error.
    Rpc {
        /// Network-defined error code.
        code: i64,
        /// Network-supplied message.
        message: String,
    },
    /// The response body did not match the expected shape.
    Decode(String),
}

/// Perform one JSON-RPC call and decode the result.
pub(crate) async fn rpc_call<P: Serialize, T: DeserializeOwned>(
    http: &reqwest::Client,
    endpoint: &Url,
    method: &str,
    params: P,
) -> Result<T, RpcFailure> {
    let request = RpcRequest {
        jsonrpc: "2.0",
        id: REQUEST_ID.fetch_add(1, Ordering::Relaxed),
        method,
        params,
    };

    let response = http
        .post(endpoint.clone())
        .json(&request)
        .send()
        .await
        .map_err(|e| RpcFailure::Transport(e.to_string()))?;

    let body: RpcResponse<T> = response
        .json()
        .await
        .map_err(|e| RpcFailure::Decode(e.to_string()))?;

    if let Some(err) = body.error {
        return Err(RpcFailure::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    body.result
        .ok_or_else(|| RpcFailure::Decode(format!("`{method}` response had no result")))
}

impl From<RpcFailure> for NetworkError {
    fn from(failure: RpcFailure) -> Self {
        match failure {
            RpcFailure::Transport(detail) => NetworkError::Connection(detail),
            RpcFailure::Rpc { code, message } => {
                NetworkError::Protocol(format!("rpc error {code}: {message}"))
            }
            RpcFailure::Decode(detail) => NetworkError::Protocol(detail),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitParams<'a> {
    account: &'a str,
    proof_system: &'a str,
    #[serde(flatten)]
    bundle: WireProofBundle,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResult {
    tx_hash: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusParams<'a> {
    tx_hash: &'a str,
}

#[derive(Deserialize)]
struct StatusResult {
    status: String,
    #[serde(default)]
    attestation: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// JSON-RPC submission channel for one proof system.
#[derive(Debug, Clone)]
pub struct RpcChannel {
    session: SessionContext,
    system: ProofSystem,
}

impl RpcChannel {
    /// Create a channel for `system` over an established session.
    pub fn new(session: SessionContext, system: ProofSystem) -> Self {
        Self { session, system }
    }
}

#[async_trait]
impl AttestationChannel for RpcChannel {
    fn system(&self) -> ProofSystem {
        self.system
    }

    async fn submit(&self, bundle: &ProofBundle) -> Result<TxReference, NetworkError> {
        let params = SubmitParams {
            account: self.session.account(),
            proof_system: self.system.as_str(),
            bundle: WireProofBundle::from(bundle),
        };
        let result: SubmitResult = rpc_call(
            self.session.http(),
            self.session.endpoint(),
            "proof_submit",
            params,
        )
        .await?;

        tracing::debug!(tx = %result.tx_hash, system = %self.system, "proof submitted");
        Ok(TxReference::new(result.tx_hash))
    }

    async fn await_attestation(
        &self,
        reference: &TxReference,
    ) -> Result<AttestationOutcome, NetworkError> {
        let mut interval = INITIAL_POLL_INTERVAL;
        loop {
            let status: StatusResult = rpc_call(
                self.session.http(),
                self.session.endpoint(),
                "proof_status",
                StatusParams {
                    tx_hash: reference.as_str(),
                },
            )
            .await?;

            match status.status.as_str() {
                "pending" => {
                    tokio::time::sleep(interval).await;
                    interval = (interval * 2).min(MAX_POLL_INTERVAL);
                }
                "attested" => {
                    let payload = match status.attestation {
                        Some(hex_payload) => Some(
                            hex::decode(hex_payload.trim_start_matches("0x")).map_err(|e| {
                                NetworkError::Protocol(format!(
                                    "attestation payload is not hex: {e}"
                                ))
                            })?,
                        ),
                        None => None,
                    };
                    return Ok(AttestationOutcome::Attested { payload });
                }
                "rejected" => {
                    return Ok(AttestationOutcome::Rejected {
                        reason: status
                            .reason
                            .unwrap_or_else(|| "proof rejected by network".to_string()),
                    });
                }
                other => {
                    return Err(NetworkError::Protocol(format!(
                        "unknown submission status `{other}`"
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_params_flatten_wire_bundle() {
        let bundle = zkrelay_core::encode(&zkrelay_core::RawProofBundle {
            vkey: "0xAB".to_string(),
            proof: "0xCD".to_string(),
            pubsignal: vec!["3".to_string()],
        })
        .unwrap();
        let params = SubmitParams {
            account: "acct-1",
            proof_system: "ultraplonk",
            bundle: WireProofBundle::from(&bundle),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["account"], "acct-1");
        assert_eq!(json["proofSystem"], "ultraplonk");
        assert_eq!(json["vk"], "0xab");
        assert_eq!(json["publicSignals"][0], "3");
    }

    #[test]
    fn status_result_tolerates_missing_optionals() {
        let status: StatusResult =
            serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert_eq!(status.status, "pending");
        assert!(status.attestation.is_none());
        assert!(status.reason.is_none());
    }

    #[test]
    fn rpc_failure_maps_to_network_error() {
        let err: NetworkError = RpcFailure::Rpc {
            code: -32000,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, NetworkError::Protocol(_)));
        assert!(err.to_string().contains("boom"));

        let err: NetworkError = RpcFailure::Transport("refused".to_string()).into();
        assert!(matches!(err, NetworkError::Connection(_)));
    }
}
