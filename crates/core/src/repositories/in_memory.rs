use crate::repositories::ports::{BookingStore, PaymentStore, Store, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::{
    Booking, NewBooking, NewPayment, NewUser, Payment, User,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    bookings: BTreeMap<i64, Booking>,
    payments: BTreeMap<i64, Payment>,
    last_user_id: i64,
    last_booking_id: i64,
    last_payment_id: i64,
}

impl Tables {
    fn remove_bookings_of(&mut self, user_id: i64) -> usize {
        let booking_ids: Vec<i64> = self
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.id)
            .collect();

        for id in &booking_ids {
            self.bookings.remove(id);
        }
        self.payments
            .retain(|_, p| !booking_ids.contains(&p.booking_id));

        booking_ids.len()
    }
}

/// A thread-safe in-memory store mirroring the relational schema,
/// foreign keys and cascades included.
///
/// Used when `STORE_BACKEND=memory` and by the test suite.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, ApiError> {
        let mut tables = self.tables.write().await;

        let taken = tables
            .users
            .values()
            .any(|u| u.username == new_user.username || u.email == new_user.email);
        if taken {
            return Err(ApiError::Conflict(
                "Username or email already registered".into(),
            ));
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            username: new_user.username,
            email: new_user.email,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, ApiError> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, ApiError> {
        let mut tables = self.tables.write().await;

        if tables.users.remove(&user_id).is_none() {
            return Ok(false);
        }
        tables.remove_bookings_of(user_id);
        Ok(true)
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, ApiError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&new_booking.user_id) {
            return Err(ApiError::BadRequest(
                "Referenced record does not exist".into(),
            ));
        }

        tables.last_booking_id += 1;
        let booking = Booking {
            id: tables.last_booking_id,
            user_id: new_booking.user_id,
            slot_number: new_booking.slot_number,
            vehicle_number: new_booking.vehicle_number,
            start_time: new_booking.start_time,
            end_time: new_booking.end_time,
            status: new_booking.status,
            created_at: Utc::now(),
        };
        tables.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, ApiError> {
        Ok(self.tables.read().await.bookings.get(&booking_id).cloned())
    }

    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        let tables = self.tables.read().await;

        let mut bookings: Vec<Booking> = tables
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| (b.start_time, b.id).cmp(&(a.start_time, a.id)));
        Ok(bookings)
    }

    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        let mut tables = self.tables.write().await;

        match tables.bookings.get_mut(&booking.id) {
            Some(stored) => {
                stored.status = booking.status;
                Ok(())
            }
            None => Err(ApiError::NotFound(format!(
                "Booking {} not found",
                booking.id
            ))),
        }
    }

    async fn cascade_delete_by_user(&self, user_id: i64) -> Result<usize, ApiError> {
        Ok(self.tables.write().await.remove_bookings_of(user_id))
    }
}

#[async_trait]
impl PaymentStore for InMemoryStore {
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, ApiError> {
        let mut tables = self.tables.write().await;

        if !tables.bookings.contains_key(&new_payment.booking_id) {
            return Err(ApiError::BadRequest(
                "Referenced record does not exist".into(),
            ));
        }

        tables.last_payment_id += 1;
        let now = Utc::now();
        let payment = Payment {
            id: tables.last_payment_id,
            booking_id: new_payment.booking_id,
            amount: new_payment.amount,
            upi_txn_id: None,
            status: new_payment.status,
            created_at: now,
            updated_at: now,
        };
        tables.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>, ApiError> {
        Ok(self.tables.read().await.payments.get(&payment_id).cloned())
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), ApiError> {
        let mut tables = self.tables.write().await;

        match tables.payments.get_mut(&payment.id) {
            Some(stored) => {
                stored.upi_txn_id = payment.upi_txn_id.clone();
                stored.status = payment.status;
                stored.updated_at = payment.updated_at;
                Ok(())
            }
            None => Err(ApiError::NotFound(format!(
                "Payment {} not found",
                payment.id
            ))),
        }
    }

    async fn payments_for_booking(&self, booking_id: i64) -> Result<Vec<Payment>, ApiError> {
        let tables = self.tables.read().await;

        Ok(tables
            .payments
            .values()
            .filter(|p| p.booking_id == booking_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
