use crate::error::ApiError;
use crate::models::entities::enum_types::PaymentStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(belongs_to(crate::models::entities::booking::Booking))]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub amount: Decimal,
    pub upi_txn_id: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Stores the payer's UPI transaction id and parks the payment in
    /// `Pending` until someone verifies it.
    ///
    /// Returns `false` when the payment already holds exactly this state, in
    /// which case nothing (not even `updated_at`) changes.
    pub fn record_submission(&mut self, upi_txn_id: &str, at: DateTime<Utc>) -> bool {
        if self.upi_txn_id.as_deref() == Some(upi_txn_id) && self.status == PaymentStatus::Pending
        {
            return false;
        }

        self.upi_txn_id = Some(upi_txn_id.to_string());
        self.status = PaymentStatus::Pending;
        self.updated_at = at;
        true
    }

    pub fn apply_review(&mut self, next: PaymentStatus, at: DateTime<Utc>) -> Result<(), ApiError> {
        if next == PaymentStatus::Pending {
            return Err(ApiError::BadRequest(
                "A payment cannot be reviewed back to Pending".into(),
            ));
        }

        if self.upi_txn_id.is_none() {
            return Err(ApiError::Conflict(format!(
                "Payment {} has no submitted UPI transaction id",
                self.id
            )));
        }

        if !self.status.can_transition_to(next) {
            return Err(ApiError::Conflict(format!(
                "Payment {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }

        self.status = next;
        self.updated_at = at;
        Ok(())
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub booking_id: i64,
    pub amount: Decimal,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn pending_payment() -> Payment {
        let created = Utc::now();
        Payment {
            id: 7,
            booking_id: 3,
            amount: dec!(150.00),
            upi_txn_id: None,
            status: PaymentStatus::Pending,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn submission_sets_txn_id_and_keeps_pending() {
        let mut payment = pending_payment();
        let created_at = payment.created_at;
        let later = created_at + Duration::minutes(5);

        assert!(payment.record_submission("ABC123", later));

        assert_eq!(payment.upi_txn_id.as_deref(), Some("ABC123"));
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.updated_at, later);
        assert_eq!(payment.created_at, created_at);
    }

    #[test]
    fn submission_is_idempotent() {
        let mut once = pending_payment();
        let at = once.created_at;
        assert!(once.record_submission("ABC123", at + Duration::seconds(1)));

        let mut twice = once.clone();
        assert!(!twice.record_submission("ABC123", at + Duration::seconds(2)));

        assert_eq!(once, twice);
    }

    #[test]
    fn resubmission_reopens_a_reviewed_payment() {
        let mut payment = pending_payment();
        payment.record_submission("ABC123", Utc::now());
        payment
            .apply_review(PaymentStatus::Failed, Utc::now())
            .unwrap();

        assert!(payment.record_submission("ABC123", Utc::now()));
        assert_eq!(payment.status, PaymentStatus::Pending);
    }

    #[test]
    fn review_requires_submitted_txn_id() {
        let mut payment = pending_payment();
        let err = payment
            .apply_review(PaymentStatus::Confirmed, Utc::now())
            .unwrap_err();

        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(payment.status, PaymentStatus::Pending);
    }

    #[test]
    fn review_walks_pending_to_confirmed() {
        let mut payment = pending_payment();
        payment.record_submission("ABC123", Utc::now());

        payment
            .apply_review(PaymentStatus::UnderReview, Utc::now())
            .unwrap();
        payment
            .apply_review(PaymentStatus::Confirmed, Utc::now())
            .unwrap();

        assert_eq!(payment.status, PaymentStatus::Confirmed);
        assert!(payment
            .apply_review(PaymentStatus::Failed, Utc::now())
            .is_err());
    }

    #[test]
    fn review_back_to_pending_is_rejected() {
        let mut payment = pending_payment();
        payment.record_submission("ABC123", Utc::now());

        let err = payment
            .apply_review(PaymentStatus::Pending, Utc::now())
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
