//! # Attestation Channel Trait (Sealed)
//!
//! The per-proof-system capability for talking to the attestation network:
//! submit a bundle, then await its terminal event. The coordinator holds a
//! registry of channels keyed by proof-system tag and dispatches through
//! this trait, so its control flow never changes when a system is added.
//!
//! ## Sealed Trait
//!
//! `AttestationChannel` is **sealed**: only channels defined within this
//! crate exist. The supported proof-system set is closed by design — a new
//! system is a new in-crate channel plus a registry entry, not an external
//! plug-in.

use async_trait::async_trait;

use zkrelay_core::{ProofBundle, ProofSystem, TxReference};

use crate::error::NetworkError;

/// Terminal event reported by the network for one submission.
///
/// Both variants are valid outcomes. Transport failures are
/// [`NetworkError`]s instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttestationOutcome {
    /// The network verified the proof and issued an attestation.
    Attested {
        /// Attestation record bytes, when the network publishes them.
        payload: Option<Vec<u8>>,
    },
    /// The network explicitly rejected the proof.
    Rejected {
        /// Network-reported rejection reason.
        reason: String,
    },
}

/// Private module that seals the [`AttestationChannel`] trait.
mod private {
    /// Sealing marker trait. Not accessible outside `zkrelay-session`.
    pub trait Sealed {}
}

/// Sealed capability trait for one proof system's submission path.
///
/// `Send + Sync` so a single channel can serve concurrent submissions.
/// Implementations must not block the executor: the attestation wait is a
/// suspension point, never a thread sleep.
#[async_trait]
pub trait AttestationChannel: private::Sealed + Send + Sync {
    /// The proof system this channel submits for.
    fn system(&self) -> ProofSystem;

    /// Send a validated bundle to the network.
    ///
    /// Returns the network-issued transaction reference for the submission.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Connection`] if the request cannot be delivered,
    /// [`NetworkError::Protocol`] if the network's answer is uninterpretable.
    async fn submit(&self, bundle: &ProofBundle) -> Result<TxReference, NetworkError>;

    /// Suspend until the network reports a terminal event for `reference`.
    ///
    /// Resolves exactly once per call, with either outcome variant. Deadline
    /// enforcement is the coordinator's job; this method may wait
    /// indefinitely.
    async fn await_attestation(
        &self,
        reference: &TxReference,
    ) -> Result<AttestationOutcome, NetworkError>;
}

// ---- Sealed trait implementations for authorized channels ----

impl private::Sealed for crate::rpc::RpcChannel {}
impl private::Sealed for crate::mock::MockChannel {}
