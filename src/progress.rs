//! State shared between the download worker and the progress reporter.
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Byte counter plus stop flag, shared via `Arc` between the two tasks.
///
/// The counter sits behind a mutex so the reporter can never observe a
/// half-written value; the guard is part of the contract even where a
/// plain integer store would not tear. The stop flag only ever moves
/// from `false` to `true`.
pub struct SharedProgress {
    bytes: Mutex<u64>,
    stopped: AtomicBool,
}

impl SharedProgress {
    pub fn new() -> Self {
        Self {
            bytes: Mutex::new(0),
            stopped: AtomicBool::new(false),
        }
    }

    /// Records `n` more bytes written to the destination file.
    pub async fn add(&self, n: u64) {
        *self.bytes.lock().await += n;
    }

    /// Current cumulative byte count.
    pub async fn bytes(&self) -> u64 {
        *self.bytes.lock().await
    }

    /// Signals the reporter to shut down. Idempotent; never reset.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

impl Default for SharedProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::join_all;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_counter_accumulates() {
        let progress = SharedProgress::new();
        assert_eq!(progress.bytes().await, 0);

        progress.add(1024).await;
        progress.add(512).await;
        assert_eq!(progress.bytes().await, 1536);
    }

    #[tokio::test]
    async fn test_stop_is_one_way() {
        let progress = SharedProgress::new();
        assert!(!progress.is_stopped());

        progress.stop();
        assert!(progress.is_stopped());

        // A second stop must not un-stop anything.
        progress.stop();
        assert!(progress.is_stopped());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let progress = Arc::new(SharedProgress::new());

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let p = progress.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..100 {
                    p.add(3).await;
                    // Interleaved reads must always see a whole value.
                    assert_eq!(p.bytes().await % 3, 0);
                }
            }));
        }

        for result in join_all(tasks).await {
            result.expect("increment task panicked");
        }

        assert_eq!(progress.bytes().await, 8 * 100 * 3);
    }
}
