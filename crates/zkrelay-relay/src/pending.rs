//! Single-resolution continuations for in-flight submissions.
//!
//! Each submission registers a oneshot continuation keyed by a fresh
//! submission id. Whoever reaches the entry first — the network watcher with
//! an outcome, or the deadline path detaching it — consumes it; the other
//! side finds the entry gone. Resolution therefore happens at most once.
//!
//! The table uses a `parking_lot` mutex and never holds the lock across an
//! `.await` point.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use uuid::Uuid;

use zkrelay_session::{AttestationOutcome, NetworkError};

/// What a watcher reports for one submission.
pub type Resolution = Result<AttestationOutcome, NetworkError>;

/// Table of unresolved submission continuations.
#[derive(Debug, Clone, Default)]
pub struct PendingAttestations {
    inner: Arc<Mutex<HashMap<Uuid, oneshot::Sender<Resolution>>>>,
}

impl PendingAttestations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new submission, returning its id and the receiving end of
    /// its continuation.
    pub fn register(&self) -> (Uuid, oneshot::Receiver<Resolution>) {
        let id = Uuid::new_v4();
        let (sender, receiver) = oneshot::channel();
        self.inner.lock().insert(id, sender);
        (id, receiver)
    }

    /// Resolve a submission with the network's report.
    ///
    /// Returns `true` if this call delivered the resolution; `false` if the
    /// submission was already resolved, detached, or its waiter has gone
    /// away.
    pub fn resolve(&self, id: Uuid, resolution: Resolution) -> bool {
        let sender = self.inner.lock().remove(&id);
        match sender {
            Some(sender) => sender.send(resolution).is_ok(),
            None => false,
        }
    }

    /// Detach a submission without resolving it (deadline expiry or caller
    /// disconnect). Returns `true` if an entry was removed.
    pub fn detach(&self, id: Uuid) -> bool {
        self.inner.lock().remove(&id).is_some()
    }

    /// Number of unresolved submissions.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no submissions are in flight.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_delivers_exactly_once() {
        let pending = PendingAttestations::new();
        let (id, receiver) = pending.register();

        assert!(pending.resolve(id, Ok(AttestationOutcome::Attested { payload: None })));
        // Second resolution finds the entry gone.
        assert!(!pending.resolve(
            id,
            Ok(AttestationOutcome::Rejected {
                reason: "late".to_string()
            })
        ));

        let delivered = receiver.await.unwrap().unwrap();
        assert_eq!(delivered, AttestationOutcome::Attested { payload: None });
    }

    #[tokio::test]
    async fn detach_prevents_resolution() {
        let pending = PendingAttestations::new();
        let (id, receiver) = pending.register();

        assert!(pending.detach(id));
        assert!(!pending.resolve(id, Ok(AttestationOutcome::Attested { payload: None })));
        // The receiver observes the dropped sender, not a value.
        assert!(receiver.await.is_err());
    }

    #[tokio::test]
    async fn dropped_waiter_makes_resolve_report_false() {
        let pending = PendingAttestations::new();
        let (id, receiver) = pending.register();
        drop(receiver);

        assert!(!pending.resolve(id, Ok(AttestationOutcome::Attested { payload: None })));
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn registrations_are_independent() {
        let pending = PendingAttestations::new();
        let (id_a, rx_a) = pending.register();
        let (_id_b, rx_b) = pending.register();
        assert_eq!(pending.len(), 2);

        assert!(pending.resolve(
            id_a,
            Ok(AttestationOutcome::Rejected {
                reason: "a only".to_string()
            })
        ));
        assert_eq!(pending.len(), 1);

        let delivered = rx_a.await.unwrap().unwrap();
        assert!(matches!(delivered, AttestationOutcome::Rejected { .. }));
        // b is still pending.
        assert!(tokio::time::timeout(std::time::Duration::from_millis(10), rx_b)
            .await
            .is_err());
    }
}
