use axum::http::StatusCode;
use serde::Serialize;

use crate::bank::BankError;
use crate::validation::ValidationError;

/// Application-level codes returned to the merchant alongside the HTTP
/// status. The operations runbook describes the action points for each.
pub mod app_code {
    pub const UNMARSHAL_BANK_RESPONSE: i64 = 1;
    pub const DATASTORE_PAYMENT_CREATION: i64 = 6;
    pub const BANK_REQUEST_FAILED: i64 = 7;
    pub const BANK_RESPONSE_NON_200: i64 = 8;
    pub const REQUEST_REJECTED: i64 = 9;
    pub const BANK_UNAVAILABLE: i64 = 10;
}

const SUPPORT_TEXT: &str =
    "An error occurred. Please contact customer support and provide the app_code";

/// Wire body for every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrResponse {
    pub status_code: u16,
    pub status_text: String,
    pub app_code: i64,
}

/// Everything that can go wrong while processing a payment, each variant
/// owning its HTTP status, app code and merchant-facing text.
#[derive(Debug)]
pub enum PaymentFailure {
    ValidationFailed(ValidationError),
    BankRejected { bank_status: u16 },
    BankUnavailable { attempts: u32 },
    BankResponseInvalid { message: String },
    PersistenceFailed { message: String },
}

impl PaymentFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentFailure::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            PaymentFailure::BankRejected { bank_status } => {
                StatusCode::from_u16(*bank_status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            PaymentFailure::BankUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PaymentFailure::BankResponseInvalid { .. } | PaymentFailure::PersistenceFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn app_code(&self) -> i64 {
        match self {
            PaymentFailure::ValidationFailed(_) => app_code::REQUEST_REJECTED,
            PaymentFailure::BankRejected { .. } => app_code::BANK_RESPONSE_NON_200,
            PaymentFailure::BankUnavailable { .. } => app_code::BANK_UNAVAILABLE,
            PaymentFailure::BankResponseInvalid { .. } => app_code::UNMARSHAL_BANK_RESPONSE,
            PaymentFailure::PersistenceFailed { .. } => app_code::DATASTORE_PAYMENT_CREATION,
        }
    }

    pub fn status_text(&self) -> String {
        match self {
            PaymentFailure::ValidationFailed(e) => {
                format!("Payment request rejected! Error: {}", e.message())
            }
            PaymentFailure::PersistenceFailed { message } => message.clone(),
            _ => SUPPORT_TEXT.to_string(),
        }
    }

    pub fn into_parts(self) -> (StatusCode, ErrResponse) {
        let status = self.status();
        let body = ErrResponse {
            status_code: status.as_u16(),
            status_text: self.status_text(),
            app_code: self.app_code(),
        };
        (status, body)
    }
}

impl From<ValidationError> for PaymentFailure {
    fn from(e: ValidationError) -> Self {
        PaymentFailure::ValidationFailed(e)
    }
}

impl From<BankError> for PaymentFailure {
    fn from(e: BankError) -> Self {
        match e {
            BankError::Rejected { status, .. } => PaymentFailure::BankRejected { bank_status: status },
            BankError::Unavailable { attempts, .. } => PaymentFailure::BankUnavailable { attempts },
            BankError::InvalidResponse { message } => PaymentFailure::BankResponseInvalid { message },
        }
    }
}
