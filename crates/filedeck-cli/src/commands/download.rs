//! Download-URL command.

use std::sync::Arc;

use clap::Args;

use crate::output::{self, OutputFormat};
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::error::AppError;

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Storage key of the file
    pub key: String,
}

/// Execute the download command
pub async fn execute(
    args: &DownloadArgs,
    store: Arc<HttpFileStore>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let link = store.download_url(&args.key).await?;

    match format {
        OutputFormat::Json => output::print_json(&link),
        // Bare URL so the output can be piped into a fetcher.
        OutputFormat::Table => println!("{}", link.url),
    }

    Ok(())
}
