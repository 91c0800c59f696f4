//! Extended metadata extracted by the storage API at upload time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived metadata for an uploaded file.
///
/// The wire representation is flat: category-specific fields are nullable
/// and only populated when the extractor recognised the file. Presentation
/// code should branch on [`FileMetadataDetail::kind`] instead of probing
/// individual options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadataDetail {
    /// Sanitized file name.
    pub filename: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Human-readable size.
    pub size_human: String,
    /// Detected MIME type.
    pub mime_type: String,
    /// File extension (lowercase, without dot).
    pub extension: String,
    /// MD5 checksum of the content.
    pub md5: String,
    /// SHA-256 checksum of the content.
    pub sha256: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Image width in pixels.
    pub image_width: Option<u32>,
    /// Image height in pixels.
    pub image_height: Option<u32>,
    /// EXIF tags, when present.
    pub exif: Option<HashMap<String, String>>,
    /// PDF page count.
    pub pdf_pages: Option<u32>,
    /// PDF author.
    pub pdf_author: Option<String>,
    /// PDF title.
    pub pdf_title: Option<String>,
    /// Media duration in seconds.
    pub duration_seconds: Option<f64>,
    /// Media codec name.
    pub codec: Option<String>,
    /// Media bitrate in bits per second.
    pub bitrate: Option<u64>,
}

/// Category-specific view over [`FileMetadataDetail`].
///
/// Matching on this enum is exhaustive, so a renderer cannot silently skip
/// a category the extractor supports.
#[derive(Debug, Clone, PartialEq)]
pub enum FileDetailKind {
    /// Image dimensions and EXIF tags.
    Image {
        /// Width in pixels.
        width: Option<u32>,
        /// Height in pixels.
        height: Option<u32>,
        /// EXIF tags.
        exif: HashMap<String, String>,
    },
    /// PDF document properties.
    Document {
        /// Page count.
        pages: Option<u32>,
        /// Document author.
        author: Option<String>,
        /// Document title.
        title: Option<String>,
    },
    /// Audio/video stream properties.
    Media {
        /// Duration in seconds.
        duration_seconds: Option<f64>,
        /// Codec name.
        codec: Option<String>,
        /// Bitrate in bits per second.
        bitrate: Option<u64>,
    },
    /// No category-specific metadata.
    Generic,
}

impl FileMetadataDetail {
    /// Classify the detail into its category-specific view.
    ///
    /// The MIME type is authoritative; missing extractor fields stay `None`
    /// inside the variant rather than demoting the file to `Generic`.
    pub fn kind(&self) -> FileDetailKind {
        if self.mime_type.starts_with("image/") {
            FileDetailKind::Image {
                width: self.image_width,
                height: self.image_height,
                exif: self.exif.clone().unwrap_or_default(),
            }
        } else if self.mime_type == "application/pdf" {
            FileDetailKind::Document {
                pages: self.pdf_pages,
                author: self.pdf_author.clone(),
                title: self.pdf_title.clone(),
            }
        } else if self.mime_type.starts_with("video/") || self.mime_type.starts_with("audio/") {
            FileDetailKind::Media {
                duration_seconds: self.duration_seconds,
                codec: self.codec.clone(),
                bitrate: self.bitrate,
            }
        } else {
            FileDetailKind::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(mime_type: &str) -> FileMetadataDetail {
        FileMetadataDetail {
            filename: "sample".to_string(),
            size_bytes: 1,
            size_human: "1.0 B".to_string(),
            mime_type: mime_type.to_string(),
            extension: String::new(),
            md5: String::new(),
            sha256: String::new(),
            uploaded_at: Utc::now(),
            image_width: None,
            image_height: None,
            exif: None,
            pdf_pages: None,
            pdf_author: None,
            pdf_title: None,
            duration_seconds: None,
            codec: None,
            bitrate: None,
        }
    }

    #[test]
    fn test_kind_image_without_dimensions() {
        // Extractor failure leaves the fields empty but keeps the category.
        let kind = detail("image/png").kind();
        assert_eq!(
            kind,
            FileDetailKind::Image {
                width: None,
                height: None,
                exif: HashMap::new(),
            }
        );
    }

    #[test]
    fn test_kind_document() {
        let mut d = detail("application/pdf");
        d.pdf_pages = Some(3);
        match d.kind() {
            FileDetailKind::Document { pages, .. } => assert_eq!(pages, Some(3)),
            other => panic!("expected Document, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_media_and_generic() {
        assert!(matches!(detail("audio/mpeg").kind(), FileDetailKind::Media { .. }));
        assert_eq!(detail("application/zip").kind(), FileDetailKind::Generic);
    }

    #[test]
    fn test_wire_roundtrip_keeps_nulls() {
        let json = serde_json::json!({
            "filename": "a.png",
            "size_bytes": 10,
            "size_human": "10.0 B",
            "mime_type": "image/png",
            "extension": "png",
            "md5": "d41d8cd98f00b204e9800998ecf8427e",
            "sha256": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "uploaded_at": "2024-05-01T10:00:00Z",
            "image_width": 640,
            "image_height": null,
            "exif": null,
            "pdf_pages": null,
            "pdf_author": null,
            "pdf_title": null,
            "duration_seconds": null,
            "codec": null,
            "bitrate": null
        });
        let detail: FileMetadataDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.image_width, Some(640));
        assert_eq!(detail.image_height, None);
    }
}
