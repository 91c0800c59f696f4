//! Dashboard statistics command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::error::AppError;
use filedeck_entity::api::HealthStatus;
use filedeck_entity::stats::UploadStats;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Skip the health probe
    #[arg(long)]
    pub no_health: bool,
}

/// Combined dashboard view
#[derive(Debug, Serialize)]
struct StatsView {
    stats: UploadStats,
    health: Option<HealthStatus>,
}

/// Execute the stats command
pub async fn execute(
    args: &StatsArgs,
    store: Arc<HttpFileStore>,
    format: OutputFormat,
) -> Result<(), AppError> {
    // A failed stats fetch degrades to zeroed placeholders instead of
    // aborting the dashboard.
    let stats = match store.stats().await {
        Ok(stats) => stats,
        Err(e) => {
            output::print_warning(&format!("Failed to load stats: {}", e));
            UploadStats::placeholder()
        }
    };

    let health = if args.no_health {
        None
    } else {
        store.health().await.ok()
    };

    match format {
        OutputFormat::Json => output::print_json(&StatsView { stats, health }),
        OutputFormat::Table => {
            println!("Storage");
            output::print_kv("Total files", &stats.total_files.to_string());
            output::print_kv("Total size", &stats.total_size_human);
            output::print_kv("Uploaded today", &stats.uploads_today.to_string());

            if !args.no_health {
                println!("API");
                match &health {
                    Some(h) => {
                        output::print_kv("Status", &h.status);
                        output::print_kv(
                            "Object store",
                            if h.storage_connected { "connected" } else { "unreachable" },
                        );
                    }
                    None => output::print_kv("Status", "unreachable"),
                }
            }
        }
    }

    Ok(())
}
