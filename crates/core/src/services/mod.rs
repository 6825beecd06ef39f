pub mod booking_service;
pub mod payment_service;
pub mod upi_service;
pub mod user_service;
