//! Redirect endpoint behavior.

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::Duration;
use serde_json::Value;

use quantumleap::api::handlers::redirect_handler;

fn server(state: quantumleap::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let h = common::create_test_harness();
    let server = server(h.state.clone());

    let entry = h
        .registry
        .create("https://example.com/target", None, None)
        .await
        .unwrap();

    let response = server.get(&format!("/{}", entry.shortcode)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let h = common::create_test_harness();
    let server = server(h.state.clone());

    let response = server.get("/nosuch").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_records_click_before_responding() {
    let h = common::create_test_harness();
    let server = server(h.state.clone());

    let entry = h
        .registry
        .create("https://example.com", None, None)
        .await
        .unwrap();

    let response = server
        .get(&format!("/{}", entry.shortcode))
        .add_header("User-Agent", "TestBot/1.0")
        .await;
    assert_eq!(response.status_code(), 307);

    // The click is persisted by the time the response exists.
    let resolution = h.registry.resolve(&entry.shortcode).await.unwrap();
    assert_eq!(resolution.entry.click_count(), 1);
}

#[tokio::test]
async fn test_redirect_expired_returns_gone_with_target() {
    let h = common::create_test_harness();
    let server = server(h.state.clone());

    let entry = h
        .registry
        .create("https://example.com/old", None, Some(1))
        .await
        .unwrap();

    h.clock.advance(Duration::minutes(2));

    let response = server.get(&format!("/{}", entry.shortcode)).await;

    assert_eq!(response.status_code(), 410);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "expired");
    assert_eq!(body["error"]["details"]["target"], "https://example.com/old");

    // An expired hit must not extend the click ledger.
    let resolution = h.registry.resolve(&entry.shortcode).await.unwrap();
    assert_eq!(resolution.entry.click_count(), 0);
}
