//! Upload validation configuration.

use serde::{Deserialize, Serialize};

/// Client-side upload limits, checked before any request is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum upload size in bytes.
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// Key prefix the storage API places uploads under.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// MIME types the storage API accepts.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size(),
            key_prefix: default_key_prefix(),
            allowed_types: default_allowed_types(),
        }
    }
}

fn default_max_size() -> u64 {
    100 * 1024 * 1024
}

fn default_key_prefix() -> String {
    "uploads/".to_string()
}

fn default_allowed_types() -> Vec<String> {
    [
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/svg+xml",
        "application/pdf",
        "text/plain",
        "text/csv",
        "application/json",
        "application/zip",
        "video/mp4",
        "audio/mpeg",
        "audio/wav",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
