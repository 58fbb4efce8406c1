use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// One-shot celebration flag with a timed auto-clear.
///
/// The flag goes up when triggered and a background timer lowers it after
/// the given duration. Re-triggering replaces the pending clear. Dropping
/// the handle aborts the timer, so a late clear can never run against a
/// component that no longer exists.
///
/// Must be used within a Tokio runtime.
pub struct Celebration {
    active_tx: watch::Sender<bool>,
    clear_timer: Option<JoinHandle<()>>,
}

impl Celebration {
    pub fn new() -> Self {
        let (active_tx, _) = watch::channel(false);
        Self {
            active_tx,
            clear_timer: None,
        }
    }

    /// Raises the flag and schedules the auto-clear.
    pub fn trigger(&mut self, clear_after: Duration) {
        if let Some(timer) = self.clear_timer.take() {
            timer.abort();
        }

        self.active_tx.send_replace(true);

        let active_tx = self.active_tx.clone();
        self.clear_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(clear_after).await;
            debug!("celebration cleared");
            active_tx.send_replace(false);
        }));
    }

    pub fn is_active(&self) -> bool {
        *self.active_tx.borrow()
    }

    /// Watch the flag, e.g. to drive a confetti overlay.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.active_tx.subscribe()
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        if let Some(timer) = self.clear_timer.take() {
            timer.abort();
        }
    }
}
