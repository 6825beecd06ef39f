mod observability;

pub mod utility;

pub use parkpay_primitives::error::ApiError;

use crate::utility::db_pool::{create_db_pool, run_migrations};
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use eyre::Report;
use parkpay_core::app_state::AppState;
use parkpay_core::repositories::{InMemoryStore, PgStore, Store};
use parkpay_primitives::models::app_config::{AppConfig, StoreBackend};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables (RUST_LOG may live in .env)
    let env_file = load_env();

    // 2. initialize logging, then report what step 1 found
    setup_logging();
    match env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => info!("No .env file found, using system environment"),
    }

    info!("Starting ParkPay application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. open the configured store
    let store = build_store(config.store_backend)?;

    // 5. build application state
    let state = AppState::new(store, config);

    // 6. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 7. build axum router
    let app = build_router(state, metric_layer, metric_handle)?;

    // 8. start HTTP server
    serve(app).await?;

    info!("ParkPay application shut down gracefully");
    Ok(())
}

fn build_store(backend: StoreBackend) -> Result<Arc<dyn Store>, Report> {
    match backend {
        StoreBackend::Postgres => {
            let pool = create_db_pool()?;
            run_migrations(&pool)?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
