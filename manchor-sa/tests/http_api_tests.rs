//! HTTP API integration tests for manchor-sa
//!
//! Drives the full router through tower's oneshot, verifying the wire
//! contract: status codes, JSON shapes, and error bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use manchor_sa::model::{ModelHandle, ModelSnapshot};
use manchor_sa::{build_router, AppState};

/// App state with the built-in model installed
fn ready_state() -> AppState {
    let model = ModelHandle::empty();
    model.install(ModelSnapshot::builtin().unwrap());
    AppState::new(model, None, 10_000)
}

/// App state with no model installed
fn not_ready_state() -> AppState {
    AppState::new(ModelHandle::empty(), None, 10_000)
}

fn analyze_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze-stress")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_not_ready_before_model_load() {
    let app = build_router(not_ready_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "not ready");
    assert_eq!(json["model_loaded"], false);
    assert_eq!(json["module"], "manchor-sa");
}

#[tokio::test]
async fn test_health_ready_after_model_load() {
    let app = build_router(ready_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["model_loaded"], true);
}

#[tokio::test]
async fn test_root_route_reports_readiness() {
    let app = build_router(ready_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ready");
}

#[tokio::test]
async fn test_analyze_calm_text() {
    let app = build_router(ready_state());

    let response = app
        .oneshot(analyze_request("I feel calm and rested"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["input"], "I feel calm and rested");
    assert_eq!(json["stress_level"], "low");
    assert!(json["confidence"].as_f64().unwrap() > 0.5);
}

#[tokio::test]
async fn test_analyze_distressed_text() {
    let app = build_router(ready_state());

    let response = app
        .oneshot(analyze_request("I can't cope, everything is falling apart"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["stress_level"], "high");
}

#[tokio::test]
async fn test_analyze_empty_text_rejected() {
    let app = build_router(ready_state());

    let response = app.oneshot(analyze_request("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_whitespace_text_rejected() {
    let app = build_router(ready_state());

    let response = app.oneshot(analyze_request("   ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_oversized_text_rejected() {
    let app = build_router(ready_state());
    let oversized = "a ".repeat(5_001); // 10,002 characters

    let response = app.oneshot(analyze_request(&oversized)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_without_model_returns_503() {
    let app = build_router(not_ready_state());

    let response = app.oneshot(analyze_request("some text")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "MODEL_NOT_LOADED");
}

#[tokio::test]
async fn test_model_reload_makes_service_ready() {
    let state = not_ready_state();
    let app = build_router(state.clone());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/model/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["lexicon_terms"].as_u64().unwrap() > 0);

    // Health flips to ready after the reload
    let health = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(health).await;
    assert_eq!(json["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = build_router(ready_state());

    let response = app
        .oneshot(Request::builder().uri("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
