//! HTTP implementation of [`FileStore`] over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use filedeck_core::config::api::ApiConfig;
use filedeck_core::config::upload::UploadConfig;
use filedeck_core::error::{AppError, ErrorKind};
use filedeck_core::result::AppResult;
use filedeck_entity::api::{ApiErrorBody, DeleteResult, DownloadLink, HealthStatus};
use filedeck_entity::file::{FileRecord, FileUploadResponse, UploadRequest};
use filedeck_entity::stats::UploadStats;

use crate::store::FileStore;
use crate::validate;

/// Listing limit bounds enforced by the storage API.
const LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// [`FileStore`] implementation talking to the remote storage API.
#[derive(Debug, Clone)]
pub struct HttpFileStore {
    /// Shared reqwest client.
    http: reqwest::Client,
    /// API base URL without a trailing slash.
    base_url: String,
    /// Upload limits checked before any request is sent.
    upload_config: UploadConfig,
}

impl HttpFileStore {
    /// Creates a store from configuration.
    pub fn new(api: &ApiConfig, upload: &UploadConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            upload_config: upload.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a response, mapping non-2xx statuses through the API's
    /// `detail` error convention.
    async fn decode<T: DeserializeOwned>(&self, response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("Failed to decode response: {e}"),
                    e,
                )
            });
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => format!("API error: {}", status.as_u16()),
        };

        if status == StatusCode::NOT_FOUND {
            Err(AppError::not_found(message))
        } else {
            Err(AppError::api(message))
        }
    }

    fn request_failed(err: reqwest::Error) -> AppError {
        AppError::with_source(ErrorKind::Network, format!("Request failed: {err}"), err)
    }
}

#[async_trait]
impl FileStore for HttpFileStore {
    async fn list(&self, prefix: &str, limit: u32) -> AppResult<Vec<FileRecord>> {
        if !LIMIT_RANGE.contains(&limit) {
            return Err(AppError::validation("Limit must be between 1 and 1000"));
        }

        tracing::debug!(prefix, limit, "listing files");
        let response = self
            .http
            .get(self.url("/files"))
            .query(&[("prefix", prefix), ("limit", &limit.to_string())])
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn stats(&self) -> AppResult<UploadStats> {
        let response = self
            .http
            .get(self.url("/files/stats"))
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn get(&self, key: &str) -> AppResult<FileRecord> {
        validate::validate_key(&self.upload_config, key)?;
        let response = self
            .http
            .get(self.url(&format!("/files/{key}")))
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn download_url(&self, key: &str) -> AppResult<DownloadLink> {
        validate::validate_key(&self.upload_config, key)?;
        let response = self
            .http
            .get(self.url(&format!("/files/{key}/download")))
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn delete(&self, key: &str) -> AppResult<DeleteResult> {
        validate::validate_key(&self.upload_config, key)?;
        tracing::debug!(key, "deleting file");
        let response = self
            .http
            .delete(self.url(&format!("/files/{key}")))
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn upload(&self, request: UploadRequest) -> AppResult<FileUploadResponse> {
        validate::validate_upload(&self.upload_config, &request)?;

        let part = Part::bytes(request.data)
            .file_name(request.filename.clone())
            .mime_str(&request.content_type)
            .map_err(|e| AppError::validation(format!("Invalid content type: {e}")))?;
        let form = Form::new().part("file", part);

        tracing::debug!(filename = %request.filename, "uploading file");
        let response = self
            .http
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(Self::request_failed)?;
        self.decode(response).await
    }
}
