use axum::extract::{Path, State};
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::PaymentService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::PaymentsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}/payments",
    params(("booking_id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Payments, oldest first", body = PaymentsResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = "Payments"
)]
pub async fn booking_payments(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<Json<PaymentsResponse>, ApiError> {
    Ok(Json(
        PaymentService::booking_payments(&state, booking_id).await?,
    ))
}
