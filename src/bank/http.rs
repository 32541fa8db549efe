use crate::bank::retry::{classify_attempt, AttemptError, RetryDirective, RetryPolicy};
use crate::bank::{AcquiringBank, BankCaptureRequest, BankCaptureResponse, BankError};

/// Reqwest-backed client for the acquiring bank's capture endpoint.
pub struct HttpBank {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
    pub retry: RetryPolicy,
}

impl HttpBank {
    async fn attempt_capture(
        &self,
        req: &BankCaptureRequest,
    ) -> Result<BankCaptureResponse, AttemptError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(req)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                r.json::<BankCaptureResponse>().await.map_err(|e| AttemptError::Decode {
                    message: e.to_string(),
                })
            }
            Ok(r) => {
                let status = r.status().as_u16();
                Err(AttemptError::Status {
                    status,
                    message: format!("Bank returned HTTP {} code", status),
                })
            }
            Err(e) if e.is_timeout() => Err(AttemptError::Transport {
                message: "bank capture request timed out".to_string(),
            }),
            Err(e) => Err(AttemptError::Transport {
                message: e.to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl AcquiringBank for HttpBank {
    async fn capture(&self, req: &BankCaptureRequest) -> Result<BankCaptureResponse, BankError> {
        let limit = self.retry.attempt_limit();
        let mut attempt = 1;

        loop {
            let err = match self.attempt_capture(req).await {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };

            match classify_attempt(&err) {
                RetryDirective::FailNow => {
                    return Err(match err {
                        AttemptError::Status { status, message } => {
                            BankError::Rejected { status, message }
                        }
                        AttemptError::Decode { message } => BankError::InvalidResponse { message },
                        AttemptError::Transport { message } => BankError::Unavailable {
                            attempts: attempt,
                            message,
                        },
                    });
                }
                RetryDirective::Continue if attempt >= limit => {
                    return Err(BankError::Unavailable {
                        attempts: attempt,
                        message: attempt_message(&err),
                    });
                }
                RetryDirective::Continue => {
                    tracing::warn!(
                        "bank capture attempt {}/{} failed, backing off: {}",
                        attempt,
                        limit,
                        attempt_message(&err)
                    );
                    tokio::time::sleep(self.retry.delay_for(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}

fn attempt_message(err: &AttemptError) -> String {
    match err {
        AttemptError::Transport { message }
        | AttemptError::Status { message, .. }
        | AttemptError::Decode { message } => message.clone(),
    }
}
