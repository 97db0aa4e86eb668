#![allow(dead_code)]

use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use filedrop_core::{CoreConfig, UploadService};
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "filedrop-test-boundary";

/// One part of a multipart form body.
pub struct Part<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub contents: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(filename: &'a str, contents: &'a [u8]) -> Self {
        Self {
            field: "file",
            filename: Some(filename),
            contents,
        }
    }

    pub fn text(field: &'a str, value: &'a str) -> Self {
        Self {
            field,
            filename: None,
            contents: value.as_bytes(),
        }
    }
}

pub struct TestApp {
    pub app: Router,
    pub storage_dir: std::path::PathBuf,
    _temp: TempDir,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_limit(1024 * 1024)
}

pub fn create_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    let temp = TempDir::new().unwrap();
    let storage_dir = temp.path().join("uploads");
    let cfg = CoreConfig::new(storage_dir.clone(), max_upload_bytes).unwrap();
    let upload_service = UploadService::new(&cfg).unwrap();
    let app = router(AppState::new(upload_service, cfg.max_upload_bytes()));

    TestApp {
        app,
        storage_dir,
        _temp: temp,
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.field, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n",
                        part.field
                    )
                    .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
