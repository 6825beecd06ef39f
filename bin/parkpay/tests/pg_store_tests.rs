//! Runs against a real database only when `TEST_DATABASE_URL` is set.

use chrono::{Duration, Utc};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{PgConnection, RunQueryDsl};
use diesel_migrations::MigrationHarness;
use parkpay::utility::db_pool::MIGRATIONS;
use parkpay_core::repositories::{BookingStore, PaymentStore, PgStore, Store, UserStore};
use parkpay_primitives::models::entities::{
    BookingStatus, NewBooking, NewPayment, NewUser, PaymentStatus,
};
use parkpay_primitives::ApiError;
use rust_decimal_macros::dec;
use serial_test::serial;

fn test_store() -> Option<PgStore> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .expect("Failed to create test database pool");

    {
        let mut conn = pool.get().expect("Failed to get DB connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        diesel::sql_query("TRUNCATE users, bookings, payments RESTART IDENTITY CASCADE")
            .execute(&mut conn)
            .expect("Failed to clean test database");
    }

    Some(PgStore::new(pool))
}

#[tokio::test]
#[serial]
async fn test_pg_payment_round_trip_and_cascade() {
    let Some(store) = test_store() else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    store.ping().await.unwrap();

    let user = store
        .create_user(NewUser {
            username: "pg-driver".into(),
            email: "pg-driver@example.com".into(),
        })
        .await
        .unwrap();

    let start = Utc::now();
    let booking = store
        .create_booking(NewBooking {
            user_id: user.id,
            slot_number: "C-3".into(),
            vehicle_number: "DL01ZZ0001".into(),
            start_time: start,
            end_time: start + Duration::hours(1),
            status: BookingStatus::Upcoming,
        })
        .await
        .unwrap();

    let mut payment = store
        .create_payment(NewPayment {
            booking_id: booking.id,
            amount: dec!(99.50),
            status: PaymentStatus::Pending,
        })
        .await
        .unwrap();
    assert_eq!(payment.amount, dec!(99.50));

    assert!(payment.record_submission("UTR-PG", Utc::now()));
    store.save_payment(&payment).await.unwrap();

    let stored = store.get_payment(payment.id).await.unwrap().unwrap();
    assert_eq!(stored.upi_txn_id.as_deref(), Some("UTR-PG"));
    assert_eq!(stored.status, PaymentStatus::Pending);

    assert_eq!(store.cascade_delete_by_user(user.id).await.unwrap(), 1);
    assert!(store.get_booking(booking.id).await.unwrap().is_none());
    assert!(store.get_payment(payment.id).await.unwrap().is_none());

    assert!(store.delete_user(user.id).await.unwrap());
    assert!(store.get_user(user.id).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_pg_duplicate_user_conflicts() {
    let Some(store) = test_store() else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let new_user = NewUser {
        username: "twice".into(),
        email: "twice@example.com".into(),
    };
    store.create_user(new_user.clone()).await.unwrap();

    let err = store.create_user(new_user).await.unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}
