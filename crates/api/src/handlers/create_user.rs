use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use parkpay_core::app_state::AppState;
use parkpay_core::services::user_service::UserService;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{CreateUserRequest, UserResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username or email already registered")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(req) = payload?;

    let user = UserService::create_user(&state, req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
