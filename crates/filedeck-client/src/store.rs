//! The file-store trait the browsing core talks to.

use async_trait::async_trait;

use filedeck_core::result::AppResult;
use filedeck_entity::api::{DeleteResult, DownloadLink, HealthStatus};
use filedeck_entity::file::{FileRecord, FileUploadResponse, UploadRequest};
use filedeck_entity::stats::UploadStats;

/// Remote file-storage operations.
///
/// The [`FileStore`] trait is defined here and implemented by
/// [`HttpFileStore`](crate::http::HttpFileStore); tests substitute an
/// in-memory fake. All operations are asynchronous and non-blocking, and
/// no cross-request ordering is guaranteed.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// List file records under a key prefix, newest API ordering.
    async fn list(&self, prefix: &str, limit: u32) -> AppResult<Vec<FileRecord>>;

    /// Fetch aggregate upload statistics.
    async fn stats(&self) -> AppResult<UploadStats>;

    /// Fetch a single record by key.
    async fn get(&self, key: &str) -> AppResult<FileRecord>;

    /// Request a short-lived download URL for a key.
    async fn download_url(&self, key: &str) -> AppResult<DownloadLink>;

    /// Delete a stored file by key.
    async fn delete(&self, key: &str) -> AppResult<DeleteResult>;

    /// Upload a file as a single multipart request.
    async fn upload(&self, request: UploadRequest) -> AppResult<FileUploadResponse>;

    /// Check API and object-store health.
    async fn health(&self) -> AppResult<HealthStatus>;
}
