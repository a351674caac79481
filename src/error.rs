use thiserror::Error;

/// Everything that can abort a download.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The command-line argument is not a parseable URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a usable response, or the transport
    /// failed mid-body.
    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("request failed: {code} {reason}")]
    Status { code: u16, reason: String },

    /// Creating or writing the destination file failed.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Failures that fit none of the kinds above, e.g. a panicked task.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Body reads surface as `io::Error`; pull the transport error back out
    /// so a network failure mid-stream reports as a connection problem
    /// rather than a file one.
    pub(crate) fn from_stream(err: std::io::Error) -> Self {
        match err.downcast::<reqwest::Error>() {
            Ok(net) => FetchError::Connection(net),
            Err(io) => FetchError::Io(io),
        }
    }
}
