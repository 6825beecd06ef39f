mod common;

use common::{create_test_server, seed_booking, seed_payment, seed_user};
use http::StatusCode;
use parkpay_core::repositories::{BookingStore, PaymentStore, UserStore};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_fetch_user() {
    let (server, _) = create_test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "username": "  asha  ", "email": "Asha@Example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["username"], "asha");
    assert_eq!(created["email"], "asha@example.com");

    let id = created["id"].as_i64().unwrap();
    let fetched: Value = server.get(&format!("/api/users/{}", id)).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let (server, store) = create_test_server();
    seed_user(&store, "ravi").await;

    server
        .post("/api/users")
        .json(&json!({ "username": "ravi", "email": "other@example.com" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_short_username_is_rejected() {
    let (server, _) = create_test_server();

    server
        .post("/api/users")
        .json(&json!({ "username": "ab", "email": "ab@example.com" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_username_length_is_checked_after_trimming() {
    let (server, store) = create_test_server();

    for username in ["     ", " ab "] {
        let response = server
            .post("/api/users")
            .json(&json!({ "username": username, "email": "x@example.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    assert!(store.get_user(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let (server, _) = create_test_server();

    server
        .post("/api/users")
        .json(&json!({ "username": "asha", "email": "not-an-email" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_fields_get_a_json_error_body() {
    let (server, _) = create_test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "username": "asha" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request payload"));
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let (server, _) = create_test_server();

    server
        .get("/api/users/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/api/users/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_bookings_and_payments() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "meera").await;
    let booking = seed_booking(&store, user.id).await;
    let payment = seed_payment(&store, booking.id, dec!(40.00)).await;

    server
        .delete(&format!("/api/users/{}", user.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(store.get_user(user.id).await.unwrap().is_none());
    assert!(store.get_booking(booking.id).await.unwrap().is_none());
    assert!(store.get_payment(payment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_bookings_are_newest_first() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "kiran").await;
    let first = seed_booking(&store, user.id).await;
    let second = seed_booking(&store, user.id).await;

    let body: Value = server
        .get(&format!("/api/users/{}/bookings", user.id))
        .await
        .json();

    let ids: Vec<i64> = body["bookings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id) && ids.contains(&second.id));
}
