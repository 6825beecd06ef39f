use crate::clients::QrClient;
use crate::repositories::Store;
use std::sync::Arc;

pub use parkpay_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: AppConfig,
    pub qr: QrClient,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Arc<Self> {
        let qr = QrClient::new(config.upi_details.qr_module_px);

        Arc::new(Self { store, config, qr })
    }
}
