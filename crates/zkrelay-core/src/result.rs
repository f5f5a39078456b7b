//! # Submission Results
//!
//! The terminal outcome of one proof submission. `Pending` exists for the
//! network-facing protocol but is transient — the relay blocks the HTTP
//! caller until a terminal state and never returns `Pending` outward.

use serde::{Deserialize, Serialize};

/// Opaque reference to the submission transaction on the attestation network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct TxReference(String);

impl TxReference {
    /// Wrap a network-issued transaction reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as issued by the network.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a submission.
///
/// Terminal states are `Attested` and `Failed`; once reached, no further
/// transitions occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum SubmissionStatus {
    /// Submitted, no terminal event yet. Never returned to HTTP callers.
    Pending,
    /// The network issued an attestation for the proof.
    Attested,
    /// The network rejected the proof. A valid result, not a transport error.
    Failed,
}

impl SubmissionStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Attested | Self::Failed)
    }
}

/// Outcome of one proof submission.
///
/// Exactly one result per submission. Serialized camelCase to match the
/// HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Terminal submission state.
    pub status: SubmissionStatus,
    /// Transaction reference issued by the network at submission.
    pub transaction_reference: TxReference,
    /// Attestation record bytes, hex-encoded; present only when attested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation_payload: Option<String>,
    /// Network-reported rejection detail; present only when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl SubmissionResult {
    /// Build an attested result.
    pub fn attested(reference: TxReference, payload: Option<Vec<u8>>) -> Self {
        Self {
            status: SubmissionStatus::Attested,
            transaction_reference: reference,
            attestation_payload: payload.map(hex::encode),
            error_detail: None,
        }
    }

    /// Build a failed result carrying the network's rejection detail.
    pub fn failed(reference: TxReference, detail: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            transaction_reference: reference,
            attestation_payload: None,
            error_detail: Some(detail.into()),
        }
    }
}
