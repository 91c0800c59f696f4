//! CLI command definitions and dispatch.

pub mod browse;
pub mod delete;
pub mod download;
pub mod info;
pub mod list;
pub mod stats;
pub mod upload;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use filedeck_client::HttpFileStore;
use filedeck_core::config::AppConfig;
use filedeck_core::error::AppError;

/// FileDeck — file-storage dashboard
#[derive(Debug, Parser)]
#[command(name = "filedeck", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (merged over config/default.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Override the configured API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse files as a folder tree
    Browse(browse::BrowseArgs),
    /// List files as a flat table
    List(list::ListArgs),
    /// Show dashboard statistics and API health
    Stats(stats::StatsArgs),
    /// Show one file's metadata
    Info(info::InfoArgs),
    /// Upload files
    Upload(upload::UploadArgs),
    /// Print a short-lived download URL
    Download(download::DownloadArgs),
    /// Delete a file
    Delete(delete::DeleteArgs),
}

impl Cli {
    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = AppConfig::load(&self.env)?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        Ok(config)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let store = Arc::new(HttpFileStore::new(&config.api, &config.upload)?);

        match &self.command {
            Commands::Browse(args) => browse::execute(args, store, config, self.format).await,
            Commands::List(args) => list::execute(args, store, config, self.format).await,
            Commands::Stats(args) => stats::execute(args, store, self.format).await,
            Commands::Info(args) => info::execute(args, store, self.format).await,
            Commands::Upload(args) => upload::execute(args, store).await,
            Commands::Download(args) => download::execute(args, store, self.format).await,
            Commands::Delete(args) => delete::execute(args, store).await,
        }
    }
}
