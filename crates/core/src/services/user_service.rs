use crate::app_state::AppState;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{BookingsResponse, CreateUserRequest, UserResponse};
use parkpay_primitives::models::entities::{NewUser, User};
use tracing::info;
use validator::Validate;

pub struct UserService;

impl UserService {
    pub async fn create_user(
        state: &AppState,
        req: CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        let req = CreateUserRequest {
            username: req.username.trim().to_string(),
            email: req.email.trim().to_lowercase(),
        };
        req.validate()?;

        let user = state
            .store
            .create_user(NewUser {
                username: req.username,
                email: req.email,
            })
            .await?;

        info!(user_id = user.id, "user.created");
        Ok(user.into())
    }

    pub async fn find_user(state: &AppState, user_id: i64) -> Result<User, ApiError> {
        state
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))
    }

    pub async fn get_user(state: &AppState, user_id: i64) -> Result<UserResponse, ApiError> {
        Ok(Self::find_user(state, user_id).await?.into())
    }

    pub async fn delete_user(state: &AppState, user_id: i64) -> Result<(), ApiError> {
        Self::find_user(state, user_id).await?;

        let bookings = state.store.cascade_delete_by_user(user_id).await?;

        if !state.store.delete_user(user_id).await? {
            return Err(ApiError::NotFound(format!("User {} not found", user_id)));
        }

        info!(user_id, bookings, "user.deleted with bookings and payments");
        Ok(())
    }

    pub async fn user_bookings(
        state: &AppState,
        user_id: i64,
    ) -> Result<BookingsResponse, ApiError> {
        Self::find_user(state, user_id).await?;

        let bookings = state.store.bookings_for_user(user_id).await?;

        Ok(BookingsResponse {
            bookings: bookings.into_iter().map(Into::into).collect(),
        })
    }
}
