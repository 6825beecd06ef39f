use async_trait::async_trait;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::{
    Booking, NewBooking, NewPayment, NewUser, Payment, User,
};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, ApiError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, ApiError>;
    /// Returns `false` when no such user existed.
    async fn delete_user(&self, user_id: i64) -> Result<bool, ApiError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, ApiError>;
    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, ApiError>;
    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError>;
    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError>;
    /// Removes every booking of the user along with their payments and
    /// returns how many bookings went.
    async fn cascade_delete_by_user(&self, user_id: i64) -> Result<usize, ApiError>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, ApiError>;
    async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>, ApiError>;
    async fn save_payment(&self, payment: &Payment) -> Result<(), ApiError>;
    async fn payments_for_booking(&self, booking_id: i64) -> Result<Vec<Payment>, ApiError>;
}

#[async_trait]
pub trait Store: UserStore + BookingStore + PaymentStore {
    async fn ping(&self) -> Result<(), ApiError>;
}
