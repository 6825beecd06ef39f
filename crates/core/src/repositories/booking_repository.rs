use diesel::prelude::*;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::booking::{Booking, NewBooking};
use parkpay_primitives::schema::bookings;

pub struct BookingRepository;

impl BookingRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        booking_id: i64,
    ) -> Result<Option<Booking>, ApiError> {
        bookings::table
            .find(booking_id)
            .first::<Booking>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_user(conn: &mut PgConnection, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        bookings::table
            .filter(bookings::user_id.eq(user_id))
            .order((bookings::start_time.desc(), bookings::id.desc()))
            .load::<Booking>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_booking: NewBooking) -> Result<Booking, ApiError> {
        diesel::insert_into(bookings::table)
            .values(&new_booking)
            .get_result::<Booking>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_status(conn: &mut PgConnection, booking: &Booking) -> Result<(), ApiError> {
        diesel::update(bookings::table.find(booking.id))
            .set(bookings::status.eq(booking.status))
            .execute(conn)?;
        Ok(())
    }

    /// Payments go with their bookings through the `ON DELETE CASCADE` key.
    pub fn delete_by_user(conn: &mut PgConnection, user_id: i64) -> Result<usize, ApiError> {
        diesel::delete(bookings::table.filter(bookings::user_id.eq(user_id)))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
