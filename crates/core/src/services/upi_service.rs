use crate::app_state::AppState;
use chrono::{DateTime, Utc};
use parkpay_primitives::error::ApiError;
use parkpay_primitives::models::app_state::UpiInfo;
use tracing::debug;
use url::form_urlencoded::byte_serialize;

pub const UPI_CURRENCY: &str = "INR";

pub struct UpiService;

impl UpiService {
    /// `TXN` followed by the issue time in epoch milliseconds, so repeated
    /// requests for the same amount carry distinct references.
    pub fn transaction_reference(issued_at: DateTime<Utc>) -> String {
        format!("TXN{}", issued_at.timestamp_millis())
    }

    pub fn build_uri(upi: &UpiInfo, amount: &str, note: &str, issued_at: DateTime<Utc>) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&tn={}&tr={}&cu={}",
            upi.payee_vpa,
            encode(&upi.payee_name),
            amount,
            encode(note),
            Self::transaction_reference(issued_at),
            UPI_CURRENCY
        )
    }

    /// PNG QR code for an ad-hoc amount, as shown by the booking screen.
    pub fn qr_for_amount(state: &AppState, amount: u64) -> Result<Vec<u8>, ApiError> {
        let upi = &state.config.upi_details;
        let uri = Self::build_uri(upi, &amount.to_string(), &upi.note, Utc::now());

        debug!("Rendering UPI QR for {}", uri);
        state.qr.render_png(&uri)
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn upi() -> UpiInfo {
        UpiInfo {
            payee_vpa: "9359444688@axl".into(),
            payee_name: "Parking Payment".into(),
            note: "Parking Booking".into(),
            qr_module_px: 4,
        }
    }

    #[test]
    fn builds_the_upi_pay_uri() {
        let issued_at = Utc.timestamp_millis_opt(1_760_000_000_123).unwrap();

        let uri = UpiService::build_uri(&upi(), "150", "Parking Booking", issued_at);

        assert_eq!(
            uri,
            "upi://pay?pa=9359444688@axl&pn=Parking+Payment&am=150\
             &tn=Parking+Booking&tr=TXN1760000000123&cu=INR"
        );
    }

    #[test]
    fn notes_are_form_encoded() {
        let issued_at = Utc.timestamp_millis_opt(0).unwrap();

        let uri = UpiService::build_uri(&upi(), "1.00", "Slot A&B #3", issued_at);

        assert!(uri.contains("&tn=Slot+A%26B+%233&"));
    }

    #[test]
    fn same_amount_at_different_times_differs_only_in_reference() {
        let first = Utc.timestamp_millis_opt(1_760_000_000_000).unwrap();
        let second = first + Duration::milliseconds(1500);

        let a = UpiService::build_uri(&upi(), "200", "Parking Booking", first);
        let b = UpiService::build_uri(&upi(), "200", "Parking Booking", second);

        assert_ne!(a, b);

        let strip_tr = |uri: &str| -> String {
            uri.split('&')
                .filter(|part| !part.starts_with("tr="))
                .collect::<Vec<_>>()
                .join("&")
        };
        assert_eq!(strip_tr(&a), strip_tr(&b));
    }
}
