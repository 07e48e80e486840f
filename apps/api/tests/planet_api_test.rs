//! # 惑星 API の HTTP テスト

mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_惑星がなければ空配列を返す() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/planets").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_惑星一覧を要約で返す() {
    // Given
    let app = TestApp::new().await;
    let proxima = app
        .insert_planet("Proxima b", Some("4.24 light-years"), Some("Proxima Centauri"))
        .await;
    let europa = app.insert_planet("Europa", None, Some("Sun")).await;

    // When
    let response = app.request(Method::GET, "/planets").await;

    // Then
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            {
                "id": proxima.id().as_i64(),
                "name": "Proxima b",
                "distance_from_earth": "4.24 light-years",
                "nearest_star": "Proxima Centauri",
            },
            {
                "id": europa.id().as_i64(),
                "name": "Europa",
                "distance_from_earth": null,
                "nearest_star": "Sun",
            },
        ])
    );
}
