use crate::error::FetchError;
use crate::progress::SharedProgress;
use crate::target::DownloadTarget;
use futures_util::TryStreamExt;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};
use tokio_util::io::StreamReader;

/// Size of one body read.
pub const CHUNK_SIZE: usize = 1024;

/// Fetches the target and streams it to disk, bumping the shared counter
/// after every chunk written.
///
/// The destination file is only created once the server has answered with
/// a success status, so a failed request leaves nothing behind. Returns
/// the total number of bytes written.
pub async fn download_file(
    target: &DownloadTarget,
    progress: Arc<SharedProgress>,
    client: &reqwest::Client,
) -> Result<u64, FetchError> {
    let response = client.get(target.url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("unknown").to_string(),
        });
    }

    let file = tokio::fs::File::create(&target.file_name).await?;
    let mut writer = BufWriter::new(file);

    // Adapt the body into an AsyncRead so it can be consumed in
    // fixed-size chunks regardless of how the transport frames it.
    let mut body = StreamReader::new(response.bytes_stream().map_err(std::io::Error::other));

    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    while !progress.is_stopped() {
        let read = body
            .read(&mut buffer)
            .await
            .map_err(FetchError::from_stream)?;
        if read == 0 {
            break;
        }

        writer.write_all(&buffer[..read]).await?;
        progress.add(read as u64).await;
        total += read as u64;
    }

    // Ensure all buffered bytes reach the file before reporting the total.
    writer.flush().await?;

    Ok(total)
}
