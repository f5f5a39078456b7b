//! # zkrelay-session — Session Manager & Attestation Channels
//!
//! Everything that touches the external attestation network lives here:
//!
//! - **Config** (`config.rs`): [`SessionConfig`] is an explicit struct built
//!   once from the environment — no fluent builder, no hidden mutable state.
//!   The account seed is redacted in `Debug` output and zeroized on drop.
//!
//! - **Session** (`session.rs`): [`open_session`] establishes a credentialed
//!   [`SessionContext`]. An unreachable endpoint surfaces as
//!   [`SessionError::Connection`], a rejected credential as
//!   [`SessionError::Auth`]. One context serves many submissions; the
//!   coordinator serializes the submit-and-sign step.
//!
//! - **Channel** (`channel.rs`): the sealed [`AttestationChannel`] trait is
//!   the per-proof-system capability `{submit, await_attestation}`. Only
//!   channels defined in this crate exist; the supported set is closed.
//!
//! - **Rpc** (`rpc.rs`): [`RpcChannel`] speaks JSON-RPC over HTTP and polls
//!   for the terminal attestation event with backoff. Polling is a
//!   suspension, never a blocking sleep — concurrent submissions are not
//!   held up by one another's waits.
//!
//! - **Mock** (`mock.rs`): [`MockChannel`] is a scriptable in-process
//!   channel for tests: attest, reject, fail, or stall, with a submit call
//!   count for no-network-call assertions.

pub mod channel;
pub mod config;
pub mod error;
pub mod mock;
pub mod rpc;
pub mod session;

pub use channel::{AttestationChannel, AttestationOutcome};
pub use config::{ConfigError, SecretSeed, SessionConfig};
pub use error::{NetworkError, SessionError};
pub use mock::MockChannel;
pub use rpc::RpcChannel;
pub use session::{open_session, SessionContext};
