use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::ports::{BookingStore, PaymentStore, Store, UserStore};
use crate::repositories::user_repository::UserRepository;
use crate::DbPool;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::{
    Booking, NewBooking, NewPayment, NewUser, Payment, User,
};
use tracing::error;

type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

/// Postgres-backed store over an r2d2 pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PgPooled, ApiError> {
        self.pool.get().map_err(|e| {
            error!("DB connection error: {}", e);
            ApiError::DatabaseConnection(e.to_string())
        })
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, ApiError> {
        UserRepository::create(&mut *self.conn()?, new_user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, ApiError> {
        UserRepository::find_by_id(&mut *self.conn()?, user_id)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, ApiError> {
        UserRepository::delete(&mut *self.conn()?, user_id)
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, ApiError> {
        BookingRepository::create(&mut *self.conn()?, new_booking)
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, ApiError> {
        BookingRepository::find_by_id(&mut *self.conn()?, booking_id)
    }

    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        BookingRepository::find_by_user(&mut *self.conn()?, user_id)
    }

    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        BookingRepository::update_status(&mut *self.conn()?, booking)
    }

    async fn cascade_delete_by_user(&self, user_id: i64) -> Result<usize, ApiError> {
        BookingRepository::delete_by_user(&mut *self.conn()?, user_id)
    }
}

#[async_trait]
impl PaymentStore for PgStore {
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, ApiError> {
        PaymentRepository::create(&mut *self.conn()?, new_payment)
    }

    async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>, ApiError> {
        PaymentRepository::find_by_id(&mut *self.conn()?, payment_id)
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), ApiError> {
        PaymentRepository::update(&mut *self.conn()?, payment)
    }

    async fn payments_for_booking(&self, booking_id: i64) -> Result<Vec<Payment>, ApiError> {
        PaymentRepository::find_by_booking(&mut *self.conn()?, booking_id)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), ApiError> {
        diesel::sql_query("SELECT 1").execute(&mut *self.conn()?)?;
        Ok(())
    }
}
