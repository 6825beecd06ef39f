use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::PaymentService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{CreatePaymentRequest, CreatedPaymentResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Pending payment opened", body = CreatedPaymentResponse),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedPaymentResponse>), ApiError> {
    let Json(req) = payload?;

    let created = PaymentService::create_payment(&state, req).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
