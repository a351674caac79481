use clap::Parser;

/// A single-file HTTP(S) downloader.
///
/// Streams the resource at URL to the current directory, printing the
/// running byte count once a second while the transfer is in flight.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL of the file to download.
    pub url: String,
}
