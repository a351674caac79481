//! # fget
//!
//! `fget` downloads a single file over HTTP or HTTPS while a companion
//! task prints the running byte count once a second.
//!
//! The moving parts:
//! - [`target`] parses the URL and derives the destination file name
//! - [`worker`] streams the response body to disk in fixed 1 KiB reads
//! - [`reporter`] prints progress until the shared stop flag flips
//! - [`coordinator`] spawns both tasks and joins them in order
//!
//! The internals are exposed as a library so the binary stays thin and the
//! pieces can be driven directly from integration tests.

pub mod args;
pub mod coordinator;
pub mod error;
pub mod progress;
pub mod reporter;
pub mod target;
pub mod worker;

pub use args::Args;
pub use error::FetchError;
pub use progress::SharedProgress;
pub use target::DownloadTarget;
