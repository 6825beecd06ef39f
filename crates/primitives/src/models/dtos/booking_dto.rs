use crate::models::entities::booking::Booking;
use crate::models::entities::enum_types::BookingStatus;
use crate::utility::validate_not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1, max = 16), custom(function = "validate_not_blank"))]
    pub slot_number: String,
    #[validate(length(min = 1, max = 32), custom(function = "validate_not_blank"))]
    pub vehicle_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: i64,
    pub user_id: i64,
    pub slot_number: String,
    pub vehicle_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            slot_number: booking.slot_number,
            vehicle_number: booking.vehicle_number,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingResponse>,
}
