use crate::utility::validate_vpa;
use eyre::{eyre, Report};
use std::env;

/// Payee details embedded in every UPI payment request.
#[derive(Debug, Clone)]
pub struct UpiInfo {
    pub payee_vpa: String,
    pub payee_name: String,
    pub note: String,
    pub qr_module_px: u32,
}

impl UpiInfo {
    pub fn new() -> Result<Self, Report> {
        let payee_vpa = env::var("UPI_PAYEE_VPA").unwrap_or_else(|_| "9359444688@axl".into());

        validate_vpa(&payee_vpa)
            .map_err(|_| eyre!("UPI_PAYEE_VPA is not a valid UPI address: {}", payee_vpa))?;

        let qr_module_px: u32 = env::var("UPI_QR_MODULE_PX")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .map_err(|e| eyre!("Invalid UPI_QR_MODULE_PX: {}", e))?;

        if qr_module_px == 0 {
            return Err(eyre!("UPI_QR_MODULE_PX must be at least 1"));
        }

        Ok(Self {
            payee_vpa,
            payee_name: env::var("UPI_PAYEE_NAME").unwrap_or_else(|_| "Parking Payment".into()),
            note: env::var("UPI_NOTE").unwrap_or_else(|_| "Parking Booking".into()),
            qr_module_px,
        })
    }
}
