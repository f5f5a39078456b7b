//! Session and network error types.
//!
//! Session setup failures (connection vs credential) are distinct from
//! transport failures during an in-flight submission. A network rejection of the proof is *not* an error — it is a
//! valid terminal outcome carried by
//! [`AttestationOutcome::Rejected`](crate::channel::AttestationOutcome).

use thiserror::Error;

/// Failure establishing a session with the attestation network.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The network endpoint is unreachable.
    #[error("connection to attestation network failed: {0}")]
    Connection(String),

    /// The account credential was rejected.
    #[error("attestation network rejected credential: {0}")]
    Auth(String),
}

/// Transport-level failure during an in-flight submission.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The connection dropped or the request could not be sent.
    #[error("network connection failed: {0}")]
    Connection(String),

    /// The network answered with something the relay cannot interpret.
    #[error("protocol error from attestation network: {0}")]
    Protocol(String),
}
