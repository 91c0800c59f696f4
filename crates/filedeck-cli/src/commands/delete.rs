//! File deletion command.

use std::sync::Arc;

use clap::Args;
use dialoguer::Confirm;

use crate::output;
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::error::AppError;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Storage key of the file
    pub key: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, store: Arc<HttpFileStore>) -> Result<(), AppError> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", args.key))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Confirmation prompt failed: {}", e)))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = store.delete(&args.key).await?;
    output::print_success(&format!("'{}' deleted", result.key));
    Ok(())
}
