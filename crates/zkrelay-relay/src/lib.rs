#![deny(missing_docs)]

//! # zkrelay-relay — Submission Coordinator
//!
//! Orchestrates one proof submission from validated bundle to terminal
//! outcome:
//!
//! 1. Look up the [`AttestationChannel`](zkrelay_session::AttestationChannel)
//!    for the requested proof system in a registry keyed by tag. The tag set
//!    is closed; adding a system is a registry insert, not a control-flow
//!    edit.
//! 2. Submit the bundle. The submit-and-sign step is serialized across
//!    concurrent submissions so the shared session's account nonces stay
//!    ordered on the external network.
//! 3. Register a single-resolution continuation for the submission and race
//!    the network's terminal event against the attestation deadline. The
//!    continuation resolves exactly once — by outcome or by timeout, never
//!    both. The wait is an async suspension; other in-flight submissions
//!    are unaffected.
//!
//! A network rejection is a valid [`SubmissionResult`](zkrelay_core::SubmissionResult)
//! with `Failed` status. Transport loss and deadline expiry are
//! [`RelayError`]s, left to the caller to retry — the relay never retries on
//! its own, and resubmitting an identical bundle is a new, independent
//! submission.

pub mod coordinator;
pub mod error;
pub mod pending;

pub use coordinator::{CoordinatorConfig, SubmissionCoordinator};
pub use error::RelayError;
pub use pending::PendingAttestations;
