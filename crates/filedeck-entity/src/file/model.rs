//! File record as returned by the storage API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::FileCategory;

/// Metadata for one stored file.
///
/// The `key` is the unique, slash-delimited identifier assigned by the
/// storage API; it drives hierarchical placement in the browsing tree,
/// while `filename` drives display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique, path-like storage key (e.g. `uploads/photos/a.jpg`).
    pub key: String,
    /// Display name, typically the last key segment.
    pub filename: String,
    /// Folder prefix of the key (empty for root-level files).
    pub folder: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Human-readable size (e.g. `1.2 MB`).
    pub size_human: String,
    /// MIME type of the file.
    pub content_type: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Direct-access URL, when the bucket is public.
    pub url: Option<String>,
}

impl FileRecord {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.filename)
            .map(|ext| ext.to_lowercase())
    }

    /// Resolve the display category from the MIME type.
    pub fn category(&self) -> FileCategory {
        FileCategory::from_content_type(&self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, content_type: &str) -> FileRecord {
        FileRecord {
            key: format!("uploads/{filename}"),
            filename: filename.to_string(),
            folder: "uploads".to_string(),
            size_bytes: 42,
            size_human: "42.0 B".to_string(),
            content_type: content_type.to_string(),
            uploaded_at: Utc::now(),
            url: None,
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(record("a.JPG", "image/jpeg").extension().as_deref(), Some("jpg"));
        assert_eq!(record("archive.tar.gz", "application/zip").extension().as_deref(), Some("gz"));
        assert_eq!(record("README", "text/plain").extension(), None);
    }

    #[test]
    fn test_category() {
        assert_eq!(record("a.jpg", "image/jpeg").category(), FileCategory::Image);
        assert_eq!(record("a.pdf", "application/pdf").category(), FileCategory::Document);
        assert_eq!(record("a.bin", "application/octet-stream").category(), FileCategory::Generic);
    }
}
