#![deny(missing_docs)]

//! # zkrelay-core — Foundational Types for the Proof Submission Relay
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `thiserror`,
//! `hex`, and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`TxReference`] is not a
//!    bare `String`, a [`FieldElement`] is not a bare `String`. You cannot
//!    pass one where the other is expected.
//!
//! 2. **[`encode`] is the sole path from untrusted input to a
//!    [`ProofBundle`].** A `ProofBundle` value always satisfies the bundle
//!    invariant: verification key, proof, and public signals present and
//!    non-empty. No constructor bypasses the checks.
//!
//! 3. **No cryptography here.** The encoder performs structural validation
//!    and format translation only. Whether a proof actually verifies is the
//!    attestation network's concern.
//!
//! 4. **[`ValidationError`] names the offending field.** Callers correcting
//!    a rejected request must not have to guess which of the three bundle
//!    fields was malformed.

pub mod bundle;
pub mod error;
pub mod result;
pub mod system;
pub mod wire;

// Re-export primary types at crate root for ergonomic imports.
pub use bundle::{encode, FieldElement, ProofBundle, RawProofBundle};
pub use error::ValidationError;
pub use result::{SubmissionResult, SubmissionStatus, TxReference};
pub use system::ProofSystem;
pub use wire::WireProofBundle;
