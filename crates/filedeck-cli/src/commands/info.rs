//! Single-file metadata command.

use std::sync::Arc;

use clap::Args;

use crate::output::{self, OutputFormat};
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::error::AppError;

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Storage key of the file
    pub key: String,
}

/// Execute the info command
pub async fn execute(
    args: &InfoArgs,
    store: Arc<HttpFileStore>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let record = store.get(&args.key).await?;

    match format {
        OutputFormat::Json => output::print_json(&record),
        OutputFormat::Table => {
            println!("{}", record.filename);
            output::print_kv("Key", &record.key);
            output::print_kv("Size", &record.size_human);
            output::print_kv("Content type", &record.content_type);
            output::print_kv("Category", record.category().label());
            output::print_kv(
                "Uploaded",
                &record.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            );
            if let Some(url) = &record.url {
                output::print_kv("URL", url);
            }
        }
    }

    Ok(())
}
