use axum::extract::{Path, State};
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::user_service::UserService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::BookingsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/bookings",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Bookings, latest start first", body = BookingsResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Bookings"
)]
pub async fn user_bookings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<BookingsResponse>, ApiError> {
    Ok(Json(UserService::user_bookings(&state, user_id).await?))
}
