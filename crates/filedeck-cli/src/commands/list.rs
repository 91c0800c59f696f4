//! Flat file listing command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::config::AppConfig;
use filedeck_core::error::AppError;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Key prefix to filter by
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Maximum number of records to fetch (defaults from configuration)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// Storage key
    key: String,
    /// Size
    size: String,
    /// Content type
    content_type: String,
    /// Category
    category: &'static str,
    /// Uploaded at
    uploaded: String,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    store: Arc<HttpFileStore>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let limit = args.limit.unwrap_or(config.api.list_limit);

    let records = match store.list(&args.prefix, limit).await {
        Ok(records) => records,
        Err(e) => {
            output::print_error(&format!("Failed to load files: {}", e));
            Vec::new()
        }
    };

    let rows: Vec<FileRow> = records
        .iter()
        .map(|r| FileRow {
            key: r.key.clone(),
            size: r.size_human.clone(),
            content_type: r.content_type.clone(),
            category: r.category().label(),
            uploaded: r.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
