//! Small response envelopes of the storage API.

use serde::{Deserialize, Serialize};

/// Response body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status string (`"ok"` when healthy).
    pub status: String,
    /// Whether the backing object store is reachable.
    pub storage_connected: bool,
}

/// Response body of `GET /files/{key}/download`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Short-lived presigned URL.
    pub url: String,
}

/// Response body of `DELETE /files/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Whether the object was deleted.
    pub deleted: bool,
    /// The key that was deleted.
    pub key: String,
}

/// Error body convention of the storage API.
///
/// Non-2xx responses carry `{ "detail": "..." }`; when the body is not
/// parseable the client falls back to a generic status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error description.
    pub detail: String,
}
