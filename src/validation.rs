use chrono::{Datelike, Utc};

use crate::domain::payment::PostPaymentRequest;

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["GBP", "USD", "EUR"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    CardNumberLength,
    CardNumberNotNumeric,
    ExpiryInPast,
    CurrencyNotSupported,
    CvvLength,
    CvvNotNumeric,
    AmexCvvLength,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::CardNumberLength => {
                "card number should be between 14-19 characters long"
            }
            ValidationError::CardNumberNotNumeric => {
                "card number must contain only numeric characters"
            }
            ValidationError::ExpiryInPast => "please provide a valid expiration date",
            ValidationError::CurrencyNotSupported => "currency code must be ISO formatted",
            ValidationError::CvvLength => "CVV should be between 3-4 characters long",
            ValidationError::CvvNotNumeric => "CVV must contain only numeric characters",
            ValidationError::AmexCvvLength => "invalid CVV",
        }
    }
}

/// Checks a merchant payment request field by field; the first violated rule
/// wins and nothing past it is inspected.
pub fn validate(req: &PostPaymentRequest) -> Result<(), ValidationError> {
    let now = Utc::now();
    validate_at(req, now.year(), now.month())
}

pub fn validate_at(
    req: &PostPaymentRequest,
    current_year: i32,
    current_month: u32,
) -> Result<(), ValidationError> {
    if req.card_number.len() < 14 || req.card_number.len() > 19 {
        return Err(ValidationError::CardNumberLength);
    }
    if !is_numeric(&req.card_number) {
        return Err(ValidationError::CardNumberNotNumeric);
    }

    if expiry_in_past(req.expiry_month, req.expiry_year, current_year, current_month) {
        return Err(ValidationError::ExpiryInPast);
    }

    let currency = req.currency.to_uppercase();
    if currency.len() != 3 || !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
        return Err(ValidationError::CurrencyNotSupported);
    }

    if req.cvv.len() < 3 || req.cvv.len() > 4 {
        return Err(ValidationError::CvvLength);
    }
    if !is_numeric(&req.cvv) {
        return Err(ValidationError::CvvNotNumeric);
    }
    // Amex-style cards carry a four digit CVV
    if req.card_number.starts_with('3') && req.cvv.len() != 4 {
        return Err(ValidationError::AmexCvvLength);
    }

    Ok(())
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn expiry_in_past(
    expiry_month: u8,
    expiry_year: u16,
    current_year: i32,
    current_month: u32,
) -> bool {
    (i32::from(expiry_year), u32::from(expiry_month)) < (current_year, current_month)
}
