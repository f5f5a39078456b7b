//! # Mock Attestation Channel
//!
//! A scriptable in-process channel for tests. No network I/O: transaction
//! references are derived deterministically (SHA-256 of the submitted proof
//! bytes) or fixed by the test, and the terminal event is whatever the
//! script says: attest, reject, fail the connection, or stall forever.
//!
//! The submit call counter backs the "validation failures never reach the
//! network" assertions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use zkrelay_core::{ProofBundle, ProofSystem, TxReference};

use crate::channel::{AttestationChannel, AttestationOutcome};
use crate::error::NetworkError;

/// Scripted terminal behavior for a mock submission.
#[derive(Debug, Clone)]
enum MockScript {
    /// Report `Attested` with the given payload.
    Attest { payload: Option<Vec<u8>> },
    /// Report `Rejected` with the given reason.
    Reject { reason: String },
    /// Never report a terminal event (for timeout tests).
    Stall,
    /// Fail the attestation wait with a connection error.
    Fail { detail: String },
}

/// In-process mock of an attestation network channel.
#[derive(Debug, Clone)]
pub struct MockChannel {
    system: ProofSystem,
    script: MockScript,
    /// Fixed reference returned by `submit`; derived from the bundle when absent.
    fixed_reference: Option<TxReference>,
    /// Simulated network latency before the terminal event.
    attest_delay: Duration,
    submit_calls: Arc<AtomicU64>,
}

impl MockChannel {
    fn new(script: MockScript) -> Self {
        Self {
            system: ProofSystem::UltraPlonk,
            script,
            fixed_reference: None,
            attest_delay: Duration::ZERO,
            submit_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A channel that attests every submission, issuing `reference`.
    pub fn attesting(reference: impl Into<String>) -> Self {
        let mut channel = Self::new(MockScript::Attest { payload: None });
        channel.fixed_reference = Some(TxReference::new(reference));
        channel
    }

    /// A channel that attests with a payload, issuing `reference`.
    pub fn attesting_with_payload(reference: impl Into<String>, payload: Vec<u8>) -> Self {
        let mut channel = Self::new(MockScript::Attest {
            payload: Some(payload),
        });
        channel.fixed_reference = Some(TxReference::new(reference));
        channel
    }

    /// A channel that attests every submission with a reference derived
    /// from the proof bytes. Distinct proofs get distinct references.
    pub fn attesting_derived() -> Self {
        Self::new(MockScript::Attest { payload: None })
    }

    /// A channel that rejects every submission with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        let mut channel = Self::new(MockScript::Reject {
            reason: reason.into(),
        });
        channel.fixed_reference = Some(TxReference::new("tx-rejected"));
        channel
    }

    /// A channel that accepts submissions but never emits a terminal event.
    pub fn stalled() -> Self {
        let mut channel = Self::new(MockScript::Stall);
        channel.fixed_reference = Some(TxReference::new("tx-stalled"));
        channel
    }

    /// A channel that accepts submissions but loses the connection during
    /// the attestation wait.
    pub fn failing(detail: impl Into<String>) -> Self {
        let mut channel = Self::new(MockScript::Fail {
            detail: detail.into(),
        });
        channel.fixed_reference = Some(TxReference::new("tx-lost"));
        channel
    }

    /// Delay the terminal event by `delay`.
    pub fn with_latency(mut self, delay: Duration) -> Self {
        self.attest_delay = delay;
        self
    }

    /// Number of `submit` calls this channel has received.
    pub fn submit_calls(&self) -> u64 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    fn derive_reference(bundle: &ProofBundle) -> TxReference {
        let mut hasher = Sha256::new();
        hasher.update(bundle.proof());
        for signal in bundle.public_signals() {
            hasher.update(signal.as_str().as_bytes());
        }
        let digest = hasher.finalize();
        TxReference::new(format!("tx-{}", hex::encode(&digest[..8])))
    }
}

#[async_trait]
impl AttestationChannel for MockChannel {
    fn system(&self) -> ProofSystem {
        self.system
    }

    async fn submit(&self, bundle: &ProofBundle) -> Result<TxReference, NetworkError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .fixed_reference
            .clone()
            .unwrap_or_else(|| Self::derive_reference(bundle)))
    }

    async fn await_attestation(
        &self,
        _reference: &TxReference,
    ) -> Result<AttestationOutcome, NetworkError> {
        if !self.attest_delay.is_zero() {
            tokio::time::sleep(self.attest_delay).await;
        }
        match &self.script {
            MockScript::Attest { payload } => Ok(AttestationOutcome::Attested {
                payload: payload.clone(),
            }),
            MockScript::Reject { reason } => Ok(AttestationOutcome::Rejected {
                reason: reason.clone(),
            }),
            MockScript::Stall => std::future::pending().await,
            MockScript::Fail { detail } => Err(NetworkError::Connection(detail.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkrelay_core::{encode, RawProofBundle};

    fn bundle(proof: &str) -> ProofBundle {
        encode(&RawProofBundle {
            vkey: "0xAB".to_string(),
            proof: proof.to_string(),
            pubsignal: vec!["3".to_string()],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn attesting_channel_returns_fixed_reference() {
        let channel = MockChannel::attesting("tx-42");
        let reference = channel.submit(&bundle("0xCD")).await.unwrap();
        assert_eq!(reference.as_str(), "tx-42");
        let outcome = channel.await_attestation(&reference).await.unwrap();
        assert_eq!(outcome, AttestationOutcome::Attested { payload: None });
    }

    #[tokio::test]
    async fn derived_references_differ_per_proof() {
        let channel = MockChannel::attesting_derived();
        let a = channel.submit(&bundle("0xCD")).await.unwrap();
        let b = channel.submit(&bundle("0xCE")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(channel.submit_calls(), 2);
    }

    #[tokio::test]
    async fn derived_reference_is_deterministic() {
        let channel = MockChannel::attesting_derived();
        let a = channel.submit(&bundle("0xCD")).await.unwrap();
        let b = channel.submit(&bundle("0xCD")).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn rejecting_channel_reports_reason() {
        let channel = MockChannel::rejecting("bad pairing");
        let reference = channel.submit(&bundle("0xCD")).await.unwrap();
        let outcome = channel.await_attestation(&reference).await.unwrap();
        assert_eq!(
            outcome,
            AttestationOutcome::Rejected {
                reason: "bad pairing".to_string()
            }
        );
    }

    #[tokio::test]
    async fn failing_channel_errors_during_wait() {
        let channel = MockChannel::failing("socket closed");
        let reference = channel.submit(&bundle("0xCD")).await.unwrap();
        let err = channel.await_attestation(&reference).await.unwrap_err();
        assert!(matches!(err, NetworkError::Connection(_)), "got: {err}");
        assert!(err.to_string().contains("socket closed"));
    }

    #[tokio::test]
    async fn stalled_channel_never_resolves() {
        let channel = MockChannel::stalled();
        let reference = channel.submit(&bundle("0xCD")).await.unwrap();
        let wait = channel.await_attestation(&reference);
        let timed = tokio::time::timeout(Duration::from_millis(20), wait).await;
        assert!(timed.is_err(), "stalled channel must not resolve");
    }
}
