use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use parkpay_core::app_state::AppState;
use parkpay_core::services::booking_service::BookingService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{BookingResponse, CreateBookingRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created as upcoming", body = BookingResponse),
        (status = 400, description = "Invalid input or start_time not before end_time"),
        (status = 404, description = "User not found")
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let Json(req) = payload?;

    let booking = BookingService::create_booking(&state, req).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
