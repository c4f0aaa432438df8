//! Cooperative interrupt signalling
//!
//! A user interrupt must abort a fetch mid-backoff rather than after the
//! current sleep completes, so the fetcher races its delays against this
//! handle instead of sleeping unconditionally.

use tokio::sync::watch;

/// Cloneable handle observing a one-way shutdown signal
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

/// Trigger side of the shutdown signal, held by the process bootstrap
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

/// Creates a connected trigger/handle pair
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

impl ShutdownTrigger {
    /// Signals shutdown to every handle; idempotent
    pub fn trigger(&self) {
        // Receivers only ever observe false -> true.
        let _ = self.tx.send(true);
    }
}

impl Shutdown {
    /// Returns true once shutdown has been signalled
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Completes when shutdown is signalled
    ///
    /// Completes immediately if the signal already fired or the trigger was
    /// dropped without firing (process teardown).
    pub async fn triggered(&mut self) {
        if *self.rx.borrow() {
            return;
        }
        // wait_for yields Err only when the sender is gone.
        let _ = self.rx.wait_for(|&fired| fired).await;
    }

    /// Creates a handle that never fires, for callers without interrupt wiring
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        // Leak the sender so the channel stays open forever.
        std::mem::forget(tx);
        Shutdown { rx }
    }
}
