//! Health endpoint behavior against the in-memory store.

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;

use quantumleap::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_store_status() {
    let h = common::create_test_harness();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(h.state.clone());
    let server = TestServer::new(app).unwrap();

    h.registry
        .create("https://example.com", None, None)
        .await
        .unwrap();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(
        body["checks"]["store"]["message"]
            .as_str()
            .unwrap()
            .contains("1 entries")
    );
}
