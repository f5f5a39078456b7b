//! # Proof System Tags
//!
//! The closed set of proof systems the relay can route to the attestation
//! network. Dispatch elsewhere in the workspace is keyed by this tag: adding
//! a proof system means adding a variant here and registering a channel for
//! it — never editing coordinator control flow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag identifying a supported proof system.
///
/// One definition, exhaustive `match` everywhere. The attestation network
/// exposes a distinct submission path per system; the relay currently
/// supports the UltraPLONK path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProofSystem {
    /// PLONK-family verifier with the "ultra" arithmetization.
    UltraPlonk,
}

impl ProofSystem {
    /// Wire label used when talking to the attestation network.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UltraPlonk => "ultraplonk",
        }
    }
}

impl std::fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a proof-system label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown proof system: {0}")]
pub struct UnknownProofSystem(pub String);

impl std::str::FromStr for ProofSystem {
    type Err = UnknownProofSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ultraplonk" => Ok(Self::UltraPlonk),
            other => Err(UnknownProofSystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn label_round_trips() {
        let system = ProofSystem::UltraPlonk;
        assert_eq!(ProofSystem::from_str(system.as_str()).unwrap(), system);
    }

    #[test]
    fn display_matches_wire_label() {
        assert_eq!(ProofSystem::UltraPlonk.to_string(), "ultraplonk");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = ProofSystem::from_str("groth16").unwrap_err();
        assert!(err.to_string().contains("groth16"));
    }

    #[test]
    fn serde_uses_lowercase_label() {
        let json = serde_json::to_string(&ProofSystem::UltraPlonk).unwrap();
        assert_eq!(json, "\"ultraplonk\"");
        let back: ProofSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProofSystem::UltraPlonk);
    }
}
