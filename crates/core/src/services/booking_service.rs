use crate::app_state::AppState;
use crate::services::user_service::UserService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{BookingResponse, CreateBookingRequest};
use parkpay_primitives::models::entities::{Booking, BookingStatus, NewBooking};
use tracing::{info, warn};
use validator::Validate;

pub struct BookingService;

impl BookingService {
    pub async fn create_booking(
        state: &AppState,
        req: CreateBookingRequest,
    ) -> Result<BookingResponse, ApiError> {
        req.validate()?;

        if req.start_time >= req.end_time {
            warn!(user_id = req.user_id, "booking.create: empty or inverted window");
            return Err(ApiError::BadRequest(
                "start_time must be before end_time".into(),
            ));
        }

        UserService::find_user(state, req.user_id).await?;

        let booking = state
            .store
            .create_booking(NewBooking {
                user_id: req.user_id,
                slot_number: req.slot_number.trim().to_string(),
                vehicle_number: req.vehicle_number.trim().to_uppercase(),
                start_time: req.start_time,
                end_time: req.end_time,
                status: BookingStatus::default(),
            })
            .await?;

        info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            slot = %booking.slot_number,
            "booking.created"
        );
        Ok(booking.into())
    }

    pub async fn find_booking(state: &AppState, booking_id: i64) -> Result<Booking, ApiError> {
        state
            .store
            .get_booking(booking_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", booking_id)))
    }

    pub async fn get_booking(
        state: &AppState,
        booking_id: i64,
    ) -> Result<BookingResponse, ApiError> {
        Ok(Self::find_booking(state, booking_id).await?.into())
    }

    pub async fn update_status(
        state: &AppState,
        booking_id: i64,
        next: BookingStatus,
    ) -> Result<BookingResponse, ApiError> {
        let mut booking = Self::find_booking(state, booking_id).await?;

        if booking.status == next {
            return Ok(booking.into());
        }

        if !booking.status.can_transition_to(next) {
            return Err(ApiError::Conflict(format!(
                "Booking {} cannot move from {} to {}",
                booking_id, booking.status, next
            )));
        }

        let previous = booking.status;
        booking.status = next;
        state.store.save_booking(&booking).await?;

        info!(booking_id, from = %previous, to = %next, "booking.status_changed");
        Ok(booking.into())
    }
}
