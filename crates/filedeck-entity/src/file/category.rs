//! Display category resolution from MIME types.

use serde::{Deserialize, Serialize};

/// Coarse file category used for icon and preview selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Raster or vector images.
    Image,
    /// PDFs and text-like documents.
    Document,
    /// Audio and video.
    Media,
    /// Compressed archives.
    Archive,
    /// Everything else.
    Generic,
}

impl FileCategory {
    /// Resolve the category for a MIME type string.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image/") {
            Self::Image
        } else if content_type == "application/pdf"
            || content_type == "application/json"
            || content_type.starts_with("text/")
        {
            Self::Document
        } else if content_type.starts_with("video/") || content_type.starts_with("audio/") {
            Self::Media
        } else if content_type == "application/zip" {
            Self::Archive
        } else {
            Self::Generic
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Media => "media",
            Self::Archive => "archive",
            Self::Generic => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type() {
        assert_eq!(FileCategory::from_content_type("image/webp"), FileCategory::Image);
        assert_eq!(FileCategory::from_content_type("text/csv"), FileCategory::Document);
        assert_eq!(FileCategory::from_content_type("video/mp4"), FileCategory::Media);
        assert_eq!(FileCategory::from_content_type("audio/wav"), FileCategory::Media);
        assert_eq!(FileCategory::from_content_type("application/zip"), FileCategory::Archive);
        assert_eq!(
            FileCategory::from_content_type("application/octet-stream"),
            FileCategory::Generic
        );
    }
}
