//! Upload request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::detail::FileMetadataDetail;

/// A file to be uploaded, prepared by the caller.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File name sent in the multipart part.
    pub filename: String,
    /// Declared MIME type.
    pub content_type: String,
    /// File content.
    pub data: Vec<u8>,
}

/// Response body of a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    /// Storage key assigned to the file.
    pub key: String,
    /// Stored file name.
    pub filename: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Human-readable size.
    pub size_human: String,
    /// Detected MIME type.
    pub content_type: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Direct-access URL, when the bucket is public.
    pub url: Option<String>,
    /// Derived metadata, when extraction succeeded.
    pub metadata: Option<FileMetadataDetail>,
}
