use axum::extract::{Path, State};
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::booking_service::BookingService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::BookingResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    params(("booking_id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, body = BookingResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, ApiError> {
    Ok(Json(BookingService::get_booking(&state, booking_id).await?))
}
