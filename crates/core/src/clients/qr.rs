use image::{DynamicImage, ImageFormat, Luma};
use parkpay_primitives::error::ApiError;
use qrcode::QrCode;
use std::io::Cursor;

/// Renders payment-request strings as PNG QR codes.
#[derive(Debug, Clone, Copy)]
pub struct QrClient {
    module_px: u32,
}

impl QrClient {
    pub fn new(module_px: u32) -> Self {
        Self {
            module_px: module_px.max(1),
        }
    }

    pub fn render_png(&self, payload: &str) -> Result<Vec<u8>, ApiError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| ApiError::QrCode(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_px, self.module_px)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ApiError::QrCode(e.to_string()))?;

        Ok(png)
    }
}
