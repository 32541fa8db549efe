use std::sync::Arc;

use axum::http::StatusCode;

use crate::bank::{AcquiringBank, BankCaptureRequest};
use crate::domain::error::{ErrResponse, PaymentFailure};
use crate::domain::payment::{PaymentRecord, PostPaymentRequest, PostPaymentResponse};
use crate::repo::payments_repo::PaymentsRepo;
use crate::validation::validate;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub bank: Arc<dyn AcquiringBank>,
}

impl PaymentService {
    /// Runs a merchant payment end to end: validate, capture at the bank,
    /// persist the confirmed outcome, shape the response. Nothing is
    /// persisted unless the bank confirmed an outcome.
    pub async fn process(
        &self,
        req: PostPaymentRequest,
    ) -> Result<PostPaymentResponse, (StatusCode, ErrResponse)> {
        if let Err(e) = validate(&req) {
            return Err(reject(e.into()));
        }

        let bank_req = to_bank_request(&req);
        let bank_resp = match self.bank.capture(&bank_req).await {
            Ok(resp) => resp,
            Err(e) => {
                let failure: PaymentFailure = e.into();
                tracing::warn!(
                    app_code = failure.app_code(),
                    "bank capture failed: {}",
                    failure.status_text()
                );
                return Err(reject(failure));
            }
        };

        let record = PaymentRecord::from_capture(&req, &bank_resp);
        if let Err(e) = self.payments_repo.add_payment(record.clone()) {
            tracing::error!("failed to persist payment {}: {}", record.id, e);
            return Err(reject(PaymentFailure::PersistenceFailed {
                message: e.to_string(),
            }));
        }

        Ok(PostPaymentResponse::from_record(record))
    }

    pub fn lookup(&self, id: &str) -> Option<PaymentRecord> {
        self.payments_repo.get_payment(id)
    }
}

fn to_bank_request(req: &PostPaymentRequest) -> BankCaptureRequest {
    BankCaptureRequest {
        card_number: req.card_number.clone(),
        expiry_date: format!("{:02}/{}", req.expiry_month, req.expiry_year),
        currency: req.currency.to_uppercase(),
        amount: req.amount,
        cvv: req.cvv.clone(),
    }
}

fn reject(failure: PaymentFailure) -> (StatusCode, ErrResponse) {
    failure.into_parts()
}
