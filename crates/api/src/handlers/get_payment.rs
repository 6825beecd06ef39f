use axum::extract::{Path, State};
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::PaymentService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::PaymentResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/payments/{payment_id}",
    params(("payment_id" = i64, Path, description = "Payment id")),
    responses(
        (status = 200, body = PaymentResponse),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payments"
)]
pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(payment_id): Path<i64>,
) -> Result<Json<PaymentResponse>, ApiError> {
    Ok(Json(PaymentService::get_payment(&state, payment_id).await?))
}
