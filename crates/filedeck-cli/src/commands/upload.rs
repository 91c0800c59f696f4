//! File upload command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::output;
use filedeck_client::{FileStore, HttpFileStore};
use filedeck_core::error::AppError;
use filedeck_entity::file::{FileDetailKind, FileMetadataDetail, UploadRequest};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Paths of the files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Override the declared content type for every file
    #[arg(long)]
    pub content_type: Option<String>,
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, store: Arc<HttpFileStore>) -> Result<(), AppError> {
    let mut failed = 0usize;

    for path in &args.files {
        match upload_one(path, args.content_type.as_deref(), store.as_ref()).await {
            Ok(()) => {}
            Err(e) => {
                output::print_error(&format!("{}: {}", path.display(), e));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(AppError::internal(format!(
            "{} of {} uploads failed",
            failed,
            args.files.len()
        )));
    }
    Ok(())
}

async fn upload_one(
    path: &PathBuf,
    content_type: Option<&str>,
    store: &HttpFileStore,
) -> Result<(), AppError> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let content_type = match content_type {
        Some(ct) => ct.to_string(),
        None => mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string(),
    };

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::storage(format!("Failed to read file: {}", e)))?;

    let response = store
        .upload(UploadRequest {
            filename,
            content_type,
            data,
        })
        .await?;

    output::print_success(&format!(
        "'{}' uploaded as {} ({})",
        response.filename, response.key, response.size_human
    ));
    if let Some(detail) = &response.metadata {
        print_detail(detail);
    }
    Ok(())
}

/// Print the category-specific metadata block for an upload.
fn print_detail(detail: &FileMetadataDetail) {
    match detail.kind() {
        FileDetailKind::Image { width, height, exif } => {
            if let (Some(width), Some(height)) = (width, height) {
                output::print_kv("Dimensions", &format!("{}x{}", width, height));
            }
            if !exif.is_empty() {
                output::print_kv("EXIF tags", &exif.len().to_string());
            }
        }
        FileDetailKind::Document { pages, author, title } => {
            if let Some(pages) = pages {
                output::print_kv("Pages", &pages.to_string());
            }
            if let Some(title) = title {
                output::print_kv("Title", &title);
            }
            if let Some(author) = author {
                output::print_kv("Author", &author);
            }
        }
        FileDetailKind::Media {
            duration_seconds,
            codec,
            bitrate,
        } => {
            if let Some(duration) = duration_seconds {
                output::print_kv("Duration", &format!("{:.1}s", duration));
            }
            if let Some(codec) = codec {
                output::print_kv("Codec", &codec);
            }
            if let Some(bitrate) = bitrate {
                output::print_kv("Bitrate", &format!("{} b/s", bitrate));
            }
        }
        FileDetailKind::Generic => {}
    }
    output::print_kv("SHA-256", &detail.sha256);
}
