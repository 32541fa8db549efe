use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::BankCaptureResponse;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostPaymentRequest {
    pub card_number: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// What we keep in the datastore for the lifetime of the process. Immutable
/// once stored. The merchant's CVV is deliberately absent: it only ever lives
/// in the transient request and the outbound bank call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRecord {
    pub id: String,
    pub card_number_last_four: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
    pub payment_status: PaymentStatus,
    // never serialized to the merchant
    #[serde(skip_serializing)]
    pub bank_authorization_code: String,
}

impl PaymentRecord {
    pub fn from_capture(req: &PostPaymentRequest, bank: &BankCaptureResponse) -> Self {
        let last_four_at = req.card_number.len().saturating_sub(4);
        PaymentRecord {
            id: Uuid::new_v4().to_string(),
            card_number_last_four: req.card_number[last_four_at..].to_string(),
            expiry_month: req.expiry_month,
            expiry_year: req.expiry_year,
            currency: req.currency.to_uppercase(),
            amount: req.amount,
            payment_status: if bank.authorized {
                PaymentStatus::Authorized
            } else {
                PaymentStatus::Declined
            },
            bank_authorization_code: bank.authorization_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostPaymentResponse {
    #[serde(flatten)]
    pub record: PaymentRecord,
    pub error_message: String,
}

impl PostPaymentResponse {
    pub fn from_record(record: PaymentRecord) -> Self {
        PostPaymentResponse {
            record,
            error_message: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetPaymentResponse {
    #[serde(flatten)]
    pub record: PaymentRecord,
}
