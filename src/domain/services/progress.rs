#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::PROGRESS_GRACE;
use crate::domain::models::PROGRESS_STEP;
use crate::domain::models::PROGRESS_TICK;

/// Drives the simulated upload gauge for one image submission. The ticker
/// races the real request: whichever finishes first, the bar always ends at
/// 100% and hides after the grace period. Dropping the ticker stops it.
pub struct ProgressTicker {
    generation: u64,
    finished: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn spawn(generation: u64, tx: mpsc::UnboundedSender<Event>) -> ProgressTicker {
        let finished = Arc::new(Notify::new());
        let notified = finished.clone();
        let handle = tokio::spawn(async move {
            run(generation, tx, notified).await;
        });

        return ProgressTicker {
            generation,
            finished,
            handle,
        };
    }

    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    /// Tells the ticker the request has completed so it can jump to 100%.
    pub fn finish(&self) {
        self.finished.notify_one();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(generation: u64, tx: mpsc::UnboundedSender<Event>, finished: Arc<Notify>) {
    let mut percent: u8 = 0;
    let mut interval = time::interval(PROGRESS_TICK);
    // The first tick completes immediately.
    interval.tick().await;

    while percent < 100 {
        tokio::select! {
            _ = interval.tick() => {
                percent = percent.saturating_add(PROGRESS_STEP).min(100);
            }
            _ = finished.notified() => {
                percent = 100;
            }
        }

        if tx.send(Event::UploadProgress { generation, percent }).is_err() {
            return;
        }
    }

    time::sleep(PROGRESS_GRACE).await;
    if tx.send(Event::UploadProgressHidden(generation)).is_err() {
        tracing::debug!(generation, "Progress receiver dropped before hiding");
    }
}
