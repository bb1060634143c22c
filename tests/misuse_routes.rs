//! Route tests for the concurrent map misuse endpoints

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

use concurrent_map_misuse::{
    config::{Config, FillerConfig},
    routes::app_router,
    AppState,
};

fn test_app(filler: FillerConfig) -> Router {
    app_router(AppState::new(Config { port: 0, filler }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_right_endpoint_returns_ok() {
    for _ in 0..10 {
        let app = test_app(FillerConfig::default());
        let (status, body) = get(app, "/concurrenthashmapmisuse/right").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}

#[tokio::test]
async fn test_wrong_endpoint_reports_ok_or_mismatch() {
    let app = test_app(FillerConfig::default());
    let (status, body) = get(app, "/concurrenthashmapmisuse/wrong").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body == "ok" || body.starts_with("error: expected 1000 entries, found "),
        "unexpected body: {}",
        body
    );
}

#[tokio::test]
async fn test_wrong_endpoint_with_one_worker_is_ok() {
    let filler = FillerConfig::new(1, 1000, 900, Duration::from_secs(30)).unwrap();
    let (status, body) = get(test_app(filler), "/concurrenthashmapmisuse/wrong").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_timeout_is_a_fatal_response() {
    // A zero bound elapses before the workers can signal completion.
    let filler = FillerConfig::new(10, 200_000, 0, Duration::ZERO).unwrap();
    let (status, body) = get(test_app(filler), "/concurrenthashmapmisuse/right").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], 504);
    assert!(json["error"].as_str().unwrap().contains("did not complete"));
}

#[tokio::test]
async fn test_health_checker() {
    let (status, body) = get(test_app(FillerConfig::default()), "/api/healthchecker").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "success");
}

#[tokio::test]
async fn test_health_checker_reports_state_config() {
    let filler = FillerConfig::new(3, 50, 40, Duration::from_secs(7)).unwrap();
    let app = app_router(AppState::new(Config { port: 8123, filler }));
    let (status, body) = get(app, "/api/healthchecker").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["port"], 8123);
    assert_eq!(json["filler"]["threads"], 3);
    assert_eq!(json["filler"]["target"], 50);
    assert_eq!(json["filler"]["initial"], 40);
    assert_eq!(json["filler"]["timeout_secs"], 7);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(
        test_app(FillerConfig::default()),
        "/concurrenthashmapmisuse/unknown",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
