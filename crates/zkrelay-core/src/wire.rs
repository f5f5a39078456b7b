//! # Wire Form
//!
//! [`WireProofBundle`] is the serialized shape a proof bundle takes on its
//! way to the attestation network: lowercase 0x-hex byte fields and public
//! signals in exact submission order. The network treats signal order as
//! significant, so the round trip through this form must never reorder.

use serde::{Deserialize, Serialize};

use crate::bundle::ProofBundle;

/// Network-facing serialization of a validated proof bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProofBundle {
    /// Verification key as lowercase 0x-hex.
    pub vk: String,
    /// Proof bytes as lowercase 0x-hex.
    pub proof: String,
    /// Public signals, submission order preserved.
    pub public_signals: Vec<String>,
}

impl From<&ProofBundle> for WireProofBundle {
    fn from(bundle: &ProofBundle) -> Self {
        Self {
            vk: format!("0x{}", hex::encode(bundle.verification_key())),
            proof: format!("0x{}", hex::encode(bundle.proof())),
            public_signals: bundle
                .public_signals()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}
