use crate::models::entities::enum_types::PaymentStatus;
use crate::models::entities::payment::Payment;
use crate::utility::{validate_amount, validate_not_blank};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    #[validate(range(min = 1))]
    pub booking_id: i64,
    #[validate(custom(function = "validate_amount"))]
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,
}

/// Payload posted by the payer after completing the transfer in their UPI app.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitUpiTxnRequest {
    pub payment_id: i64,
    #[validate(length(min = 1, max = 64), custom(function = "validate_not_blank"))]
    pub upi_txn_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewPaymentRequest {
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub booking_id: i64,
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,
    pub upi_txn_id: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            amount: payment.amount,
            upi_txn_id: payment.upi_txn_id,
            status: payment.status,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}

/// Returned when a payment is opened: the record plus what the payer needs
/// to complete it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedPaymentResponse {
    pub payment: PaymentResponse,
    pub upi_uri: String,
    pub qr_image_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentsResponse {
    pub payments: Vec<PaymentResponse>,
}
