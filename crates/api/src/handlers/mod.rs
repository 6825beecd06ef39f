pub mod booking_payments;
pub mod create_booking;
pub mod create_payment;
pub mod create_user;
pub mod delete_user;
pub mod get_booking;
pub mod get_payment;
pub mod get_user;
pub mod health;
pub mod payment_qr_image;
pub mod review_payment;
pub mod submit_upi_txn;
pub mod update_booking_status;
pub mod upi_qr_image;
pub mod user_bookings;
