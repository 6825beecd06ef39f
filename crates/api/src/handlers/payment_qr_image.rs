use crate::handlers::upi_qr_image::png_response;
use axum::extract::{Path, State};
use axum::response::Response;
use parkpay_core::app_state::AppState;
use parkpay_core::services::payment_service::PaymentService;
use parkpay_primitives::error::ApiError;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/payments/{payment_id}/upi_qr_image/",
    params(("payment_id" = i64, Path, description = "Payment id")),
    responses(
        (status = 200, description = "UPI QR code for the stored amount as image/png"),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payments"
)]
pub async fn payment_qr_image(
    State(state): State<Arc<AppState>>,
    Path(payment_id): Path<i64>,
) -> Result<Response, ApiError> {
    let png = PaymentService::qr_for_payment(&state, payment_id).await?;

    Ok(png_response(png))
}
