//! Integration tests for the HTTP store against a mock API.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use filedeck_client::store::FileStore;
use filedeck_client::HttpFileStore;
use filedeck_core::config::api::ApiConfig;
use filedeck_core::config::upload::UploadConfig;
use filedeck_core::error::ErrorKind;
use filedeck_entity::file::UploadRequest;

fn store_for(server: &MockServer) -> HttpFileStore {
    let api = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    HttpFileStore::new(&api, &UploadConfig::default()).expect("client should build")
}

fn record_json(key: &str, uploaded_at: &str) -> serde_json::Value {
    json!({
        "key": key,
        "filename": key.rsplit('/').next().unwrap(),
        "folder": "uploads",
        "size_bytes": 1024,
        "size_human": "1.0 KB",
        "content_type": "image/png",
        "uploaded_at": uploaded_at,
        "url": null
    })
}

#[tokio::test]
async fn test_list_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("prefix", "uploads/"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record_json("uploads/a.png", "2024-05-01T10:00:00Z"),
            record_json("uploads/b.png", "2024-05-02T10:00:00Z"),
        ])))
        .mount(&server)
        .await;

    let records = store_for(&server).list("uploads/", 50).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].key, "uploads/a.png");
    assert_eq!(records[0].size_bytes, 1024);
}

#[tokio::test]
async fn test_list_rejects_bad_limit_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let err = store.list("", 0).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    let err = store.list("", 1001).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_error_body_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/files/uploads/a.png"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "Failed to delete file" })),
        )
        .mount(&server)
        .await;

    let err = store_for(&server).delete("uploads/a.png").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Api);
    assert_eq!(err.message, "Failed to delete file");
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/stats"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = store_for(&server).stats().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Api);
    assert_eq!(err.message, "API error: 503");
}

#[tokio::test]
async fn test_not_found_maps_to_not_found_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/uploads/missing.png"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "File not found" })))
        .mount(&server)
        .await;

    let err = store_for(&server).get("uploads/missing.png").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "File not found");
}

#[tokio::test]
async fn test_invalid_key_fails_before_any_request() {
    let server = MockServer::start().await;
    // Nothing mounted: any request would 404 loudly, but none should leave.
    let store = store_for(&server);

    for key in ["", "etc/passwd", "uploads/../secrets.txt"] {
        let err = store.delete(key).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation, "key {key:?}");
        let err = store.download_url(key).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation, "key {key:?}");
    }
}

#[tokio::test]
async fn test_download_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/uploads/a.png/download"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "url": "https://cdn.test/a.png" })),
        )
        .mount(&server)
        .await;

    let link = store_for(&server).download_url("uploads/a.png").await.unwrap();
    assert_eq!(link.url, "https://cdn.test/a.png");
}

#[tokio::test]
async fn test_upload_sends_multipart_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("notes.txt"))
        .and(body_string_contains("hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "uploads/ab12cd34ef56_notes.txt",
            "filename": "notes.txt",
            "size_bytes": 11,
            "size_human": "11.0 B",
            "content_type": "text/plain",
            "uploaded_at": "2024-05-01T10:00:00Z",
            "url": null,
            "metadata": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = store_for(&server)
        .upload(UploadRequest {
            filename: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            data: b"hello world".to_vec(),
        })
        .await
        .unwrap();
    assert_eq!(response.key, "uploads/ab12cd34ef56_notes.txt");
}

#[tokio::test]
async fn test_upload_validation_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = store_for(&server)
        .upload(UploadRequest {
            filename: "tool.exe".to_string(),
            content_type: "application/x-msdownload".to_string(),
            data: vec![1, 2, 3],
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok", "storage_connected": true })),
        )
        .mount(&server)
        .await;

    let health = store_for(&server).health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.storage_connected);
}

#[tokio::test]
async fn test_connection_failure_maps_to_network() {
    let api = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    };
    let store = HttpFileStore::new(&api, &UploadConfig::default()).unwrap();
    let err = store.stats().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
}
