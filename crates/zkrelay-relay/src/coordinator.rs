//! The submission coordinator.
//!
//! State machine per submission: `Received → Encoding → Submitting →
//! (Attested | Failed | TimedOut)`. Encoding happens upstream in the HTTP
//! boundary; this module owns `Submitting` onward. No transition skips a
//! state and no automatic retry exists at any stage.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use zkrelay_core::{ProofBundle, ProofSystem, SubmissionResult};
use zkrelay_session::{AttestationChannel, AttestationOutcome, NetworkError};

use crate::error::RelayError;
use crate::pending::PendingAttestations;

/// Coordinator tuning.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Deadline for the network's terminal event, counted from submission.
    pub attestation_timeout: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            attestation_timeout: Duration::from_secs(60),
        }
    }
}

impl CoordinatorConfig {
    /// Load tuning from the environment.
    ///
    /// Variables:
    /// - `ZKV_ATTESTATION_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Self {
        let attestation_timeout = std::env::var("ZKV_ATTESTATION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Self::default().attestation_timeout);
        Self {
            attestation_timeout,
        }
    }
}

/// Cleans up a submission's watcher and pending entry on every exit path,
/// including the caller disconnecting and dropping the submit future
/// mid-wait. Detaching after a normal resolution is a no-op.
struct WatcherGuard {
    pending: PendingAttestations,
    id: Uuid,
    watcher: JoinHandle<()>,
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        self.pending.detach(self.id);
        self.watcher.abort();
    }
}

/// Routes validated bundles to per-proof-system channels and resolves each
/// submission to exactly one terminal outcome.
pub struct SubmissionCoordinator {
    channels: HashMap<ProofSystem, Arc<dyn AttestationChannel>>,
    pending: PendingAttestations,
    /// Serializes the submit-and-sign step across concurrent submissions.
    /// Held only while submitting, never across the attestation wait.
    submit_gate: tokio::sync::Mutex<()>,
    attestation_timeout: Duration,
}

impl SubmissionCoordinator {
    /// Create a coordinator with no channels registered.
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            channels: HashMap::new(),
            pending: PendingAttestations::new(),
            submit_gate: tokio::sync::Mutex::new(()),
            attestation_timeout: config.attestation_timeout,
        }
    }

    /// Register a channel under its proof-system tag.
    ///
    /// Replaces any previously registered channel for the same tag.
    pub fn register_channel(&mut self, channel: Arc<dyn AttestationChannel>) {
        self.channels.insert(channel.system(), channel);
    }

    /// Proof systems this coordinator can route.
    pub fn supported_systems(&self) -> Vec<ProofSystem> {
        self.channels.keys().copied().collect()
    }

    /// Number of submissions currently awaiting a terminal event.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Submit a validated bundle and wait for its terminal outcome.
    ///
    /// Returns a [`SubmissionResult`] for both network verdicts — attested
    /// and rejected. Errors cover the cases with no verdict: unknown proof
    /// system, transport failure, or deadline expiry. The caller decides
    /// whether to retry; the coordinator never does.
    pub async fn submit(
        &self,
        bundle: &ProofBundle,
        system: ProofSystem,
    ) -> Result<SubmissionResult, RelayError> {
        let channel = self
            .channels
            .get(&system)
            .cloned()
            .ok_or(RelayError::UnsupportedSystem(system))?;

        let reference = {
            let _gate = self.submit_gate.lock().await;
            channel.submit(bundle).await?
        };
        tracing::debug!(tx = %reference, %system, "bundle submitted, awaiting attestation");

        let (id, receiver) = self.pending.register();
        let watcher = tokio::spawn({
            let channel = Arc::clone(&channel);
            let pending = self.pending.clone();
            let reference = reference.clone();
            async move {
                let resolution = channel.await_attestation(&reference).await;
                if !pending.resolve(id, resolution) {
                    tracing::debug!(tx = %reference, "submission already detached, dropping outcome");
                }
            }
        });
        let _guard = WatcherGuard {
            pending: self.pending.clone(),
            id,
            watcher,
        };

        match tokio::time::timeout(self.attestation_timeout, receiver).await {
            Ok(Ok(Ok(AttestationOutcome::Attested { payload }))) => {
                tracing::info!(tx = %reference, "proof attested");
                Ok(SubmissionResult::attested(reference, payload))
            }
            Ok(Ok(Ok(AttestationOutcome::Rejected { reason }))) => {
                tracing::info!(tx = %reference, %reason, "proof rejected by network");
                Ok(SubmissionResult::failed(reference, reason))
            }
            Ok(Ok(Err(network))) => Err(RelayError::Network(network)),
            // The watcher resolved the entry but the value never arrived:
            // the sender was consumed by a racing detach.
            Ok(Err(_)) => Err(RelayError::Network(NetworkError::Connection(
                "attestation watcher detached".to_string(),
            ))),
            Err(_elapsed) => {
                tracing::warn!(tx = %reference, timeout = ?self.attestation_timeout, "attestation deadline expired");
                Err(RelayError::AttestationTimeout(self.attestation_timeout))
            }
        }
    }
}
