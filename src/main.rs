use anyhow::{Context, Result};
use clap::Parser;
use fget::args::Args;
use fget::coordinator;
use fget::target::DownloadTarget;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let target = DownloadTarget::parse(&args.url)?;
    println!("Starting download for: {}", args.url);

    let client = reqwest::Client::builder()
        .user_agent(concat!("fget/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let file_name = target.file_name.clone();
    let total = coordinator::run(target, client)
        .await
        .context("download failed")?;

    println!("Download complete: {} ({} bytes)", file_name, total);

    Ok(())
}
