pub mod app_state;
pub mod clients;
pub mod repositories;
pub mod services;

use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub use app_state::AppState;
