use serde::{Deserialize, Serialize};

pub mod http;
pub mod retry;

/// Wire request for the acquiring bank's capture endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankCaptureRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankCaptureResponse {
    pub authorized: bool,
    pub authorization_code: String,
}

/// Terminal outcome of a capture call, after the retry policy has run its
/// course.
#[derive(Debug)]
pub enum BankError {
    /// The bank definitively refused the request (non-200, non-5xx). Not
    /// retried; the bank's own status is passed through to the merchant.
    Rejected { status: u16, message: String },
    /// Transport failures or 5xx responses persisted through every allowed
    /// attempt.
    Unavailable { attempts: u32, message: String },
    /// The bank answered 200 with a body we could not decode.
    InvalidResponse { message: String },
}

#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    async fn capture(&self, req: &BankCaptureRequest) -> Result<BankCaptureResponse, BankError>;
}
