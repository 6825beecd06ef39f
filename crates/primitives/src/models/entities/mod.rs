pub mod booking;
pub mod enum_types;
pub mod payment;
pub mod user;

pub use booking::*;
pub use enum_types::*;
pub use payment::*;
pub use user::*;
