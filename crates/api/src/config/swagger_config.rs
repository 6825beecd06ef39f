use crate::handlers::{
    booking_payments::__path_booking_payments, create_booking::__path_create_booking,
    create_payment::__path_create_payment, create_user::__path_create_user,
    delete_user::__path_delete_user, get_booking::__path_get_booking,
    get_payment::__path_get_payment, get_user::__path_get_user, health::__path_health_check,
    payment_qr_image::__path_payment_qr_image, review_payment::__path_review_payment,
    submit_upi_txn::__path_submit_upi_txn, update_booking_status::__path_update_booking_status,
    upi_qr_image::__path_upi_qr_image, user_bookings::__path_user_bookings,
};
use parkpay_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        upi_qr_image, submit_upi_txn, health_check,
        create_user, get_user, delete_user, user_bookings,
        create_booking, get_booking, update_booking_status, booking_payments,
        create_payment, get_payment, payment_qr_image, review_payment
    ),
    components(schemas(
        ActionResponse, HealthStatus, BookingStatus, PaymentStatus,
        CreateUserRequest, UserResponse,
        CreateBookingRequest, UpdateBookingStatusRequest, BookingResponse, BookingsResponse,
        CreatePaymentRequest, SubmitUpiTxnRequest, ReviewPaymentRequest,
        PaymentResponse, CreatedPaymentResponse, PaymentsResponse
    )),
    tags(
        (name = "Payments", description = "UPI QR codes and transaction reconciliation"),
        (name = "Bookings", description = "Parking slot bookings"),
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Liveness and store connectivity")
    )
)]
pub struct ApiDoc;
