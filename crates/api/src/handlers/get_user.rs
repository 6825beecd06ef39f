use axum::extract::{Path, State};
use axum::Json;
use parkpay_core::app_state::AppState;
use parkpay_core::services::user_service::UserService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::UserResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserService::get_user(&state, user_id).await?))
}
