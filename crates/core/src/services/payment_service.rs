use crate::app_state::AppState;
use crate::services::booking_service::BookingService;
use crate::services::upi_service::UpiService;
use chrono::Utc;
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::dtos::{
    CreatePaymentRequest, CreatedPaymentResponse, PaymentResponse, PaymentsResponse,
    SubmitUpiTxnRequest,
};
use parkpay_primitives::models::entities::{NewPayment, Payment, PaymentStatus};
use parkpay_primitives::utility::format_amount;
use tracing::{info, warn};
use validator::Validate;

pub const INVALID_PAYMENT_ID: &str = "Invalid Payment ID";
pub const TXN_SUBMITTED: &str = "Txn ID submitted";

pub struct PaymentService;

impl PaymentService {
    pub async fn create_payment(
        state: &AppState,
        req: CreatePaymentRequest,
    ) -> Result<CreatedPaymentResponse, ApiError> {
        req.validate()?;

        let booking = BookingService::find_booking(state, req.booking_id).await?;

        let mut amount = req.amount;
        amount.rescale(2);

        let payment = state
            .store
            .create_payment(NewPayment {
                booking_id: booking.id,
                amount,
                status: PaymentStatus::default(),
            })
            .await?;

        info!(
            payment_id = payment.id,
            booking_id = booking.id,
            amount = %payment.amount,
            "payment.created"
        );

        let upi_uri = Self::upi_uri_for(state, &payment);
        let qr_image_url = format!(
            "{}/api/payments/{}/upi_qr_image/",
            state.config.app_url, payment.id
        );

        Ok(CreatedPaymentResponse {
            payment: payment.into(),
            upi_uri,
            qr_image_url,
        })
    }

    pub async fn find_payment(state: &AppState, payment_id: i64) -> Result<Payment, ApiError> {
        state
            .store
            .get_payment(payment_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Payment {} not found", payment_id)))
    }

    pub async fn get_payment(
        state: &AppState,
        payment_id: i64,
    ) -> Result<PaymentResponse, ApiError> {
        Ok(Self::find_payment(state, payment_id).await?.into())
    }

    pub async fn booking_payments(
        state: &AppState,
        booking_id: i64,
    ) -> Result<PaymentsResponse, ApiError> {
        BookingService::find_booking(state, booking_id).await?;

        let payments = state.store.payments_for_booking(booking_id).await?;

        Ok(PaymentsResponse {
            payments: payments.into_iter().map(Into::into).collect(),
        })
    }

    /// Records the UPI transaction id a payer reports for a payment.
    ///
    /// An unknown payment id is a 400. Concurrent submissions for one
    /// payment are last-writer-wins.
    pub async fn submit_upi_txn(
        state: &AppState,
        req: SubmitUpiTxnRequest,
    ) -> Result<(), ApiError> {
        let req = SubmitUpiTxnRequest {
            payment_id: req.payment_id,
            upi_txn_id: req.upi_txn_id.trim().to_string(),
        };
        req.validate()?;

        let mut payment = state
            .store
            .get_payment(req.payment_id)
            .await?
            .ok_or_else(|| {
                warn!(payment_id = req.payment_id, "upi.submit: unknown payment");
                ApiError::BadRequest(INVALID_PAYMENT_ID.into())
            })?;

        if payment.record_submission(&req.upi_txn_id, Utc::now()) {
            state.store.save_payment(&payment).await?;
        }

        info!(
            payment_id = payment.id,
            upi_txn_id = %req.upi_txn_id,
            "upi.submit: transaction id recorded, awaiting verification"
        );
        Ok(())
    }

    pub async fn review_payment(
        state: &AppState,
        payment_id: i64,
        next: PaymentStatus,
    ) -> Result<PaymentResponse, ApiError> {
        let mut payment = Self::find_payment(state, payment_id).await?;
        let previous = payment.status;

        payment.apply_review(next, Utc::now())?;
        state.store.save_payment(&payment).await?;

        info!(payment_id, from = %previous, to = %next, "payment.reviewed");
        Ok(payment.into())
    }

    pub async fn qr_for_payment(state: &AppState, payment_id: i64) -> Result<Vec<u8>, ApiError> {
        let payment = Self::find_payment(state, payment_id).await?;

        state.qr.render_png(&Self::upi_uri_for(state, &payment))
    }

    fn upi_uri_for(state: &AppState, payment: &Payment) -> String {
        let note = format!("Parking booking {}", payment.booking_id);

        UpiService::build_uri(
            &state.config.upi_details,
            &format_amount(&payment.amount),
            &note,
            Utc::now(),
        )
    }
}
