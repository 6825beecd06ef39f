use diesel::prelude::*;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::user::{NewUser, User};
use parkpay_primitives::schema::users;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: i64) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Conflict("Username or email already registered".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    pub fn delete(conn: &mut PgConnection, user_id: i64) -> Result<bool, ApiError> {
        let deleted = diesel::delete(users::table.find(user_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
