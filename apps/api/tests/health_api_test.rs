//! # ヘルスチェックとレイヤー構成の HTTP テスト

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_ヘルスチェックはバージョンを返す() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "status": "healthy", "version": env!("CARGO_PKG_VERSION") })
    );
}

#[tokio::test]
async fn test_dbに接続できればreadyを返す() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "status": "ready", "checks": { "database": "ok" } })
    );
}

#[tokio::test]
async fn test_dbに接続できなければ503を返す() {
    // Given
    let app = TestApp::new().await;
    app.pool.close().await;

    // When
    let response = app.request(Method::GET, "/health/ready").await;

    // Then
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json(),
        json!({ "status": "not_ready", "checks": { "database": "error" } })
    );
}

#[tokio::test]
async fn test_dbに接続できなければ一覧は500を返す() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.request(Method::GET, "/scientists").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let app = TestApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/scientists")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.headers().contains_key("x-request-id"),
        "レスポンスに x-request-id ヘッダーが含まれること"
    );
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let app = TestApp::new().await;
    let custom_id = "client-provided-request-id-123";

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", custom_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        custom_id,
        "クライアント提供の Request ID がそのまま返されること"
    );
}

#[tokio::test]
async fn test_未定義のパスは404を返す() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/galaxies").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
