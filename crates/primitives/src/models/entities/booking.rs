use crate::models::entities::enum_types::BookingStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

/// A reservation of one parking slot for a time window.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub slot_number: String,
    pub vehicle_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub user_id: i64,
    pub slot_number: String,
    pub vehicle_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}
