use axum::extract::{Path, State};
use axum::http::StatusCode;
use parkpay_core::app_state::AppState;
use parkpay_core::services::user_service::UserService;
use parkpay_primitives::error::ApiError;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User, bookings and payments deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    UserService::delete_user(&state, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
