mod common;

use common::create_test_server;
use http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_ok_over_memory_store() {
    let (server, _) = create_test_server();

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "API is healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (server, _) = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert!(body["paths"]["/submit-upi-txn/"]["post"].is_object());
}
