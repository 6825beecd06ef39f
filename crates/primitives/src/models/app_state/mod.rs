pub mod app_config;
pub mod upi_details;

pub use app_config::*;
pub use upi_details::*;
