use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest amount a `NUMERIC(10, 2)` column can hold.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

const MONEY_SCALE: u32 = 2;

lazy_static! {
    static ref VPA_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._\-]{2,256}@[A-Za-z][A-Za-z0-9]{1,63}$").expect("Invalid VPA regex");
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank"));
    }
    Ok(())
}

/// UPI virtual payment address, e.g. `9359444688@axl`.
pub fn validate_vpa(vpa: &str) -> Result<(), ValidationError> {
    if !VPA_PATTERN.is_match(vpa) {
        return Err(error("invalid_vpa"));
    }
    Ok(())
}

pub fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(error("amount_not_positive"));
    }

    if amount.normalize().scale() > MONEY_SCALE {
        return Err(error("amount_too_precise"));
    }

    if *amount > MAX_AMOUNT {
        return Err(error("amount_too_large"));
    }

    Ok(())
}

/// Renders an amount the way UPI apps expect it: two decimal places.
pub fn format_amount(amount: &Decimal) -> String {
    let mut rounded = amount.round_dp(MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

fn error(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}
