mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, create_test_app, get_request, send};

#[tokio::test]
async fn test_health() {
    let t = create_test_app();

    let response = send(&t.app, get_request("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "ok": true, "message": "filedrop is alive" })
    );
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let t = create_test_app();

    let response = send(&t.app, get_request("/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/upload"]["post"].is_object());
    assert!(json["paths"]["/files/{filename}"]["get"].is_object());
    assert!(json["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let t = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = send(&t.app, request).await;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_for_upload() {
    let t = create_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/upload")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(&t.app, request).await;

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_unknown_route() {
    let t = create_test_app();

    let response = send(&t.app, get_request("/nope")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
