//! Aggregate upload statistics.

use serde::{Deserialize, Serialize};

/// Summary counters served by `GET /files/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadStats {
    /// Total number of stored files.
    pub total_files: u64,
    /// Total stored size in bytes.
    pub total_size_bytes: u64,
    /// Human-readable total size.
    pub total_size_human: String,
    /// Files uploaded since midnight UTC.
    pub uploads_today: u64,
}

impl UploadStats {
    /// Zeroed placeholder shown when the stats endpoint is unreachable.
    pub fn placeholder() -> Self {
        Self {
            total_size_human: "0.0 B".to_string(),
            ..Self::default()
        }
    }
}
