//! Coordinator error type.

use std::time::Duration;

use thiserror::Error;

use zkrelay_core::ProofSystem;
use zkrelay_session::NetworkError;

/// Failure of one coordinated submission.
///
/// A network rejection of the proof is *not* represented here — it is a
/// terminal `Failed` result. These variants cover the cases where no
/// terminal result exists.
#[derive(Error, Debug)]
pub enum RelayError {
    /// No channel is registered for the requested proof system.
    #[error("no channel registered for proof system `{0}`")]
    UnsupportedSystem(ProofSystem),

    /// Transport failure while submitting or awaiting attestation.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The network did not report a terminal event within the deadline.
    #[error("attestation not received within {0:?}")]
    AttestationTimeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_system_names_tag() {
        let err = RelayError::UnsupportedSystem(ProofSystem::UltraPlonk);
        assert!(err.to_string().contains("ultraplonk"));
    }

    #[test]
    fn timeout_reports_deadline() {
        let err = RelayError::AttestationTimeout(Duration::from_millis(50));
        assert!(err.to_string().contains("50ms"));
    }
}
