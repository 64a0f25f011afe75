//! Graceful stop for the redirect server.
//!
//! `main` (or a test) owns a [`Shutdown`] and hands a receiver to
//! `HttpServer::run`. Triggering it stops the listener from accepting new
//! connections; requests already in flight finish first.

use tokio::sync::broadcast;

/// One-shot stop signal fanned out to every running server.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. A no-op when none is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once the server should stop draining and exit.
///
/// A dropped [`Shutdown`] counts as a trigger, so a server never outlives
/// its owner.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    match rx.recv().await {
        Ok(()) => tracing::info!("Shutdown requested, draining connections"),
        Err(_) => tracing::info!("Shutdown handle dropped, draining connections"),
    }
}
