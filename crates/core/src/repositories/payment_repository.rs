use diesel::prelude::*;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::entities::payment::{NewPayment, Payment};
use parkpay_primitives::schema::payments;

pub struct PaymentRepository;

impl PaymentRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        payment_id: i64,
    ) -> Result<Option<Payment>, ApiError> {
        payments::table
            .find(payment_id)
            .first::<Payment>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_booking(
        conn: &mut PgConnection,
        booking_id: i64,
    ) -> Result<Vec<Payment>, ApiError> {
        payments::table
            .filter(payments::booking_id.eq(booking_id))
            .order(payments::id.asc())
            .load::<Payment>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_payment: NewPayment) -> Result<Payment, ApiError> {
        diesel::insert_into(payments::table)
            .values(&new_payment)
            .get_result::<Payment>(conn)
            .map_err(ApiError::from)
    }

    /// Writes back the mutable columns. `created_at` is never touched.
    pub fn update(conn: &mut PgConnection, payment: &Payment) -> Result<(), ApiError> {
        let updated = diesel::update(payments::table.find(payment.id))
            .set((
                payments::upi_txn_id.eq(payment.upi_txn_id.as_deref()),
                payments::status.eq(payment.status),
                payments::updated_at.eq(payment.updated_at),
            ))
            .execute(conn)?;

        if updated == 0 {
            return Err(ApiError::NotFound(format!(
                "Payment {} not found",
                payment.id
            )));
        }

        Ok(())
    }
}
