//! Lifecycle of the two concurrent tasks.
use crate::error::FetchError;
use crate::progress::SharedProgress;
use crate::reporter;
use crate::target::DownloadTarget;
use crate::worker;
use std::sync::Arc;

/// Runs the download and the progress reporter as independent tasks and
/// joins them in order: worker first, then reporter.
///
/// The stop flag is set by the worker wrapper on every exit path and
/// forced again here, so the reporter is guaranteed to wind down within
/// one report interval and nothing keeps running after this returns.
pub async fn run(target: DownloadTarget, client: reqwest::Client) -> Result<u64, FetchError> {
    let progress = Arc::new(SharedProgress::new());

    let reporter_task = tokio::spawn(reporter::report_progress(progress.clone()));

    let worker_progress = progress.clone();
    let worker_task = tokio::spawn(async move {
        let result = worker::download_file(&target, worker_progress.clone(), &client).await;
        // Notify the reporter whether the download succeeded or not.
        worker_progress.stop();
        result
    });

    let result = worker_task
        .await
        .unwrap_or_else(|e| Err(FetchError::Other(format!("download task failed: {e}"))));

    // Already set unless the worker panicked before its wrapper ran.
    progress.stop();

    let _ = reporter_task.await;

    result
}
