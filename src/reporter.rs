//! Periodic console progress output.
use crate::progress::SharedProgress;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// How often the running byte count is printed.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Prints the running byte count once per interval until the stop flag
/// flips.
///
/// The flag is re-checked after each sleep, so the loop exits within one
/// interval of the download finishing. This task only reads shared state
/// and has no failure path of its own.
pub async fn report_progress(progress: Arc<SharedProgress>) {
    while !progress.is_stopped() {
        println!("Downloaded {} bytes", progress.bytes().await);
        sleep(REPORT_INTERVAL).await;
    }
}
