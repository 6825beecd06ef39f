use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::PaymentService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{PaymentResponse, ReviewPaymentRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/payments/{payment_id}/review",
    params(("payment_id" = i64, Path, description = "Payment id")),
    request_body = ReviewPaymentRequest,
    responses(
        (status = 200, description = "Review decision applied", body = PaymentResponse),
        (status = 400, description = "Cannot review back to Pending"),
        (status = 404, description = "Payment not found"),
        (status = 409, description = "No transaction id yet, or transition not allowed")
    ),
    tag = "Payments"
)]
pub async fn review_payment(
    State(state): State<Arc<AppState>>,
    Path(payment_id): Path<i64>,
    payload: Result<Json<ReviewPaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let Json(req) = payload?;

    let payment = PaymentService::review_payment(&state, payment_id, req.status).await?;

    Ok(Json(payment))
}
