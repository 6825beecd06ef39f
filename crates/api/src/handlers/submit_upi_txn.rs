use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::{PaymentService, TXN_SUBMITTED};
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{ActionResponse, SubmitUpiTxnRequest};
use std::sync::Arc;
use tracing::warn;

#[utoipa::path(
    post,
    path = "/submit-upi-txn/",
    request_body = SubmitUpiTxnRequest,
    responses(
        (status = 200, description = "Transaction id recorded", body = ActionResponse),
        (status = 400, description = "Unknown payment id or malformed payload", body = ActionResponse),
        (status = 405, description = "Only POST is accepted", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Payments"
)]
pub async fn submit_upi_txn(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitUpiTxnRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(req) = payload.inspect_err(|rejection| {
        warn!("upi.submit: rejected payload: {}", rejection.body_text());
    })?;

    PaymentService::submit_upi_txn(&state, req).await?;

    Ok(Json(ActionResponse::success(TXN_SUBMITTED)))
}

pub async fn submit_upi_txn_wrong_method() -> (StatusCode, Json<ActionResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ActionResponse::failure("Invalid request method")),
    )
}
