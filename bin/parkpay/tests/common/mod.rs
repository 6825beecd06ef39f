#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use parkpay_core::app_state::AppState;
use parkpay_core::repositories::{BookingStore, InMemoryStore, PaymentStore, UserStore};
use parkpay_primitives::models::app_state::{AppConfig, StoreBackend, UpiInfo};
use parkpay_primitives::models::entities::{
    Booking, BookingStatus, NewBooking, NewPayment, NewUser, Payment, PaymentStatus, User,
};
use rust_decimal::Decimal;
use std::sync::Arc;

pub const TEST_APP_URL: &str = "http://parkpay.test";

pub fn test_config() -> AppConfig {
    AppConfig {
        app_url: TEST_APP_URL.to_string(),
        store_backend: StoreBackend::Memory,
        upi_details: UpiInfo {
            payee_vpa: "9359444688@axl".to_string(),
            payee_name: "Parking Payment".to_string(),
            note: "Parking Booking".to_string(),
            qr_module_px: 4,
        },
    }
}

/// App state over a fresh in-memory store; the store handle is returned so
/// tests can seed and inspect rows directly.
pub fn create_test_app_state() -> (Arc<AppState>, InMemoryStore) {
    let store = InMemoryStore::new();
    let state = AppState::new(Arc::new(store.clone()), test_config());

    (state, store)
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    parkpay_api::app::create_router(state)
}

pub fn create_test_server() -> (TestServer, InMemoryStore) {
    let (state, store) = create_test_app_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    (server, store)
}

pub async fn seed_user(store: &InMemoryStore, username: &str) -> User {
    store
        .create_user(NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
        })
        .await
        .unwrap()
}

pub async fn seed_booking(store: &InMemoryStore, user_id: i64) -> Booking {
    let start_time = Utc::now() + Duration::hours(1);

    store
        .create_booking(NewBooking {
            user_id,
            slot_number: "A-01".to_string(),
            vehicle_number: "MH12AB1234".to_string(),
            start_time,
            end_time: start_time + Duration::hours(2),
            status: BookingStatus::Upcoming,
        })
        .await
        .unwrap()
}

pub async fn seed_payment(store: &InMemoryStore, booking_id: i64, amount: Decimal) -> Payment {
    store
        .create_payment(NewPayment {
            booking_id,
            amount,
            status: PaymentStatus::Pending,
        })
        .await
        .unwrap()
}

/// One user with one booking holding `count` pending payments (ids 1..=count).
pub async fn seed_payments(store: &InMemoryStore, count: usize) -> Vec<Payment> {
    let user = seed_user(store, "driver").await;
    let booking = seed_booking(store, user.id).await;

    let mut payments = Vec::with_capacity(count);
    for _ in 0..count {
        payments.push(seed_payment(store, booking.id, Decimal::new(15000, 2)).await);
    }
    payments
}
