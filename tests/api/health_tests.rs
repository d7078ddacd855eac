//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["database"]["status"], "unhealthy");
    assert!(body["checks"]["database"]["message"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let app = TestApp::new();
    app.roll("manual", "1d4").await;

    let (status, text) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("dnd_reference_dice_rolls_total"));
    assert!(text.contains("dnd_reference_http_requests_total"));
}
