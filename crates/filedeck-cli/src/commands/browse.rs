//! Folder-tree browsing command.

use std::sync::Arc;

use clap::Args;
use serde_json::json;

use crate::output::{self, OutputFormat};
use filedeck_browser::FileBrowser;
use filedeck_client::HttpFileStore;
use filedeck_core::config::AppConfig;
use filedeck_core::error::AppError;
use filedeck_entity::tree::TreeNode;

/// Arguments for the browse command
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Key prefix to browse
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Maximum number of records to fetch (defaults from configuration)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Open every folder instead of only the top level
    #[arg(long)]
    pub expand_all: bool,
}

/// Execute the browse command
pub async fn execute(
    args: &BrowseArgs,
    store: Arc<HttpFileStore>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let limit = args.limit.unwrap_or(config.api.list_limit);
    let mut browser = FileBrowser::new(store, args.prefix.clone(), limit);

    if let Err(e) = browser.refresh().await {
        output::print_error(&format!("Failed to load files: {}", e));
    }

    if args.expand_all {
        for path in folder_paths(&browser.tree()) {
            if !browser.is_expanded(&path) {
                browser.toggle(&path);
            }
        }
    }

    match format {
        OutputFormat::Json => output::print_json(&tree_to_json(&browser.tree())),
        OutputFormat::Table => {
            let tree = browser.tree();
            if tree.is_empty() {
                println!("No files found. Upload some files to get started.");
            } else {
                render_nodes(&tree, 0, &browser);
            }
        }
    }

    Ok(())
}

fn render_nodes(nodes: &[TreeNode], depth: usize, browser: &FileBrowser) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            TreeNode::Folder(folder) => {
                let open = browser.is_expanded(&folder.path);
                let marker = if open { "▾" } else { "▸" };
                let count = folder.file_count();
                let noun = if count == 1 { "file" } else { "files" };
                println!("{indent}{marker} {}/  ({count} {noun})", folder.name);
                if open {
                    render_nodes(&folder.children, depth + 1, browser);
                }
            }
            TreeNode::File(file) => {
                let record = &file.record;
                println!(
                    "{indent}  {}  {}  {}",
                    file.name,
                    record.size_human,
                    record.uploaded_at.format("%b %d %H:%M"),
                );
            }
        }
    }
}

/// Collect every folder path in the tree, depth-first.
fn folder_paths(nodes: &[TreeNode]) -> Vec<String> {
    let mut paths = Vec::new();
    for node in nodes {
        if let TreeNode::Folder(folder) = node {
            paths.push(folder.path.clone());
            paths.extend(folder_paths(&folder.children));
        }
    }
    paths
}

/// Serialize the tree in the shared `{ type, name, ... }` node shape.
fn tree_to_json(nodes: &[TreeNode]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = nodes
        .iter()
        .map(|node| match node {
            TreeNode::Folder(folder) => json!({
                "type": "folder",
                "name": folder.name,
                "path": folder.path,
                "children": tree_to_json(&folder.children),
            }),
            TreeNode::File(file) => json!({
                "type": "file",
                "name": file.name,
                "data": file.record.as_ref(),
            }),
        })
        .collect();
    serde_json::Value::Array(items)
}
