pub mod booking_repository;
pub mod in_memory;
pub mod payment_repository;
pub mod pg_store;
pub mod ports;
pub mod user_repository;

pub use in_memory::InMemoryStore;
pub use pg_store::PgStore;
pub use ports::{BookingStore, PaymentStore, Store, UserStore};
