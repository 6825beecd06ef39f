use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use parkpay_core::app_state::AppState;
use parkpay_core::services::upi_service::UpiService;
use parkpay_primitives::error::ApiError;
use std::sync::Arc;

pub(crate) fn png_response(png: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/upi_qr_image/{amount}/",
    params(("amount" = u64, Path, description = "Whole rupee amount to request")),
    responses(
        (status = 200, description = "UPI payment QR code as image/png"),
        (status = 404, description = "Amount is not a non-negative integer")
    ),
    tag = "Payments"
)]
pub async fn upi_qr_image(
    State(state): State<Arc<AppState>>,
    amount: Result<Path<u64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(amount) =
        amount.map_err(|_| ApiError::NotFound("No QR route for this amount".into()))?;

    let png = UpiService::qr_for_amount(&state, amount)?;

    Ok(png_response(png))
}
