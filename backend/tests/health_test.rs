//! Integration tests for health and metrics endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;
    let (status, body) = app.get("/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_reports_disabled_cache() {
    let app = common::TestApp::new().await;
    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    let body = common::parse(&body);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
    assert_eq!(body["checks"]["cache"]["status"], "disabled");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_metrics_endpoint() {
    let app = common::TestApp::new().await;
    let (status, _) = app.get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_api_v1_root() {
    let app = common::TestApp::new().await;
    let (status, body) = app.get("/api/v1/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Prakriti API v1"));
}
