use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use parkpay_core::app_state::AppState;
use parkpay_core::services::booking_service::BookingService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{BookingResponse, UpdateBookingStatusRequest};
use std::sync::Arc;

#[utoipa::path(
    patch,
    path = "/api/bookings/{booking_id}/status",
    params(("booking_id" = i64, Path, description = "Booking id")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, body = BookingResponse),
        (status = 400, description = "Malformed payload or unknown status"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "Bookings"
)]
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
    payload: Result<Json<UpdateBookingStatusRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, ApiError> {
    let Json(req) = payload?;

    let booking = BookingService::update_status(&state, booking_id, req.status).await?;

    Ok(Json(booking))
}
