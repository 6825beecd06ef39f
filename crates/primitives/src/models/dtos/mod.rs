pub mod booking_dto;
pub mod common_dto;
pub mod payment_dto;
pub mod user_dto;

pub use booking_dto::*;
pub use common_dto::*;
pub use payment_dto::*;
pub use user_dto::*;
