mod common;

use common::{create_test_server, seed_booking, seed_payment, seed_user, TEST_APP_URL};
use http::StatusCode;
use parkpay_core::repositories::PaymentStore;
use parkpay_primitives::models::entities::PaymentStatus;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_payment_returns_upi_details() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "driver").await;
    let booking = seed_booking(&store, user.id).await;

    let response = server
        .post("/api/payments")
        .json(&json!({ "booking_id": booking.id, "amount": "150" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["payment"]["id"].as_i64().unwrap();

    assert_eq!(body["payment"]["amount"], "150.00");
    assert_eq!(body["payment"]["status"], "Pending");
    assert_eq!(body["payment"]["upi_txn_id"], Value::Null);
    assert_eq!(
        body["qr_image_url"],
        format!("{}/api/payments/{}/upi_qr_image/", TEST_APP_URL, id)
    );

    let uri = body["upi_uri"].as_str().unwrap();
    assert!(uri.starts_with("upi://pay?pa=9359444688@axl&pn=Parking+Payment&am=150.00&tn="));
    assert!(uri.ends_with("&cu=INR"));
}

#[tokio::test]
async fn test_payment_amount_must_be_positive_money() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "driver").await;
    let booking = seed_booking(&store, user.id).await;

    for amount in ["0", "-10", "1.005"] {
        server
            .post("/api/payments")
            .json(&json!({ "booking_id": booking.id, "amount": amount }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_payment_for_unknown_booking_is_not_found() {
    let (server, _) = create_test_server();

    server
        .post("/api/payments")
        .json(&json!({ "booking_id": 12, "amount": "10.00" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_qr_and_listing() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "driver").await;
    let booking = seed_booking(&store, user.id).await;
    let first = seed_payment(&store, booking.id, dec!(40.00)).await;
    let second = seed_payment(&store, booking.id, dec!(60.00)).await;

    let response = server
        .get(&format!("/api/payments/{}/upi_qr_image/", first.id))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/png");

    let body: Value = server
        .get(&format!("/api/bookings/{}/payments", booking.id))
        .await
        .json();
    let ids: Vec<i64> = body["payments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    server
        .get("/api/payments/999/upi_qr_image/")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_requires_a_submitted_txn_id() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "driver").await;
    let booking = seed_booking(&store, user.id).await;
    let payment = seed_payment(&store, booking.id, dec!(40.00)).await;

    server
        .post(&format!("/api/payments/{}/review", payment.id))
        .json(&json!({ "status": "Confirmed" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_review_confirms_then_resubmission_reopens() {
    let (server, store) = create_test_server();
    let user = seed_user(&store, "driver").await;
    let booking = seed_booking(&store, user.id).await;
    let payment = seed_payment(&store, booking.id, dec!(40.00)).await;
    let review = format!("/api/payments/{}/review", payment.id);

    server
        .post("/submit-upi-txn/")
        .json(&json!({ "payment_id": payment.id, "upi_txn_id": "UTR1" }))
        .await
        .assert_status(StatusCode::OK);

    let body: Value = server
        .post(&review)
        .json(&json!({ "status": "UnderReview" }))
        .await
        .json();
    assert_eq!(body["status"], "UnderReview");

    server
        .post(&review)
        .json(&json!({ "status": "Pending" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(&review)
        .json(&json!({ "status": "Failed" }))
        .await
        .assert_status(StatusCode::OK);

    server
        .post(&review)
        .json(&json!({ "status": "Confirmed" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .post("/submit-upi-txn/")
        .json(&json!({ "payment_id": payment.id, "upi_txn_id": "UTR2" }))
        .await
        .assert_status(StatusCode::OK);

    let stored = store.get_payment(payment.id).await.unwrap().unwrap();
    assert_eq!(stored.status, PaymentStatus::Pending);
    assert_eq!(stored.upi_txn_id.as_deref(), Some("UTR2"));
}
