use std::time::Duration;

/// Governs how the bank client retries a capture attempt. Backoff for retry
/// `k` is `base_delay * multiplier^(k-1)`, so delays double with the default
/// multiplier.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Never allows fewer than 3 attempts; a flaky bank gets a fair shot
    /// before we report it unavailable.
    pub fn attempt_limit(&self) -> u32 {
        self.max_attempts.max(3)
    }

    /// Delay to sleep after failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * self.multiplier.saturating_pow(attempt.saturating_sub(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDirective {
    Continue,
    FailNow,
}

/// One capture attempt's failure, before the retry policy decides what to do
/// with it.
#[derive(Debug)]
pub enum AttemptError {
    /// Connection refused, timeout, or any other transport-level failure.
    Transport { message: String },
    /// The bank answered with a non-200 status.
    Status { status: u16, message: String },
    /// The bank answered 200 but the body did not decode.
    Decode { message: String },
}

pub fn classify_attempt(err: &AttemptError) -> RetryDirective {
    match err {
        AttemptError::Transport { .. } => RetryDirective::Continue,
        AttemptError::Status { status, .. } if *status >= 500 => RetryDirective::Continue,
        AttemptError::Status { .. } => RetryDirective::FailNow,
        AttemptError::Decode { .. } => RetryDirective::FailNow,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_attempt, AttemptError, RetryDirective, RetryPolicy};
    use std::time::Duration;

    #[test]
    fn backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    }

    #[test]
    fn attempt_limit_floors_at_three() {
        let policy = RetryPolicy {
            max_attempts: 1,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.attempt_limit(), 3);

        let policy = RetryPolicy {
            max_attempts: 5,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.attempt_limit(), 5);
    }

    #[test]
    fn transport_failures_continue() {
        let err = AttemptError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(classify_attempt(&err), RetryDirective::Continue);
    }

    #[test]
    fn server_errors_continue_client_errors_fail_now() {
        let err = AttemptError::Status {
            status: 503,
            message: "Bank returned HTTP 503 code".to_string(),
        };
        assert_eq!(classify_attempt(&err), RetryDirective::Continue);

        let err = AttemptError::Status {
            status: 400,
            message: "Bank returned HTTP 400 code".to_string(),
        };
        assert_eq!(classify_attempt(&err), RetryDirective::FailNow);
    }

    #[test]
    fn decode_failures_fail_now() {
        let err = AttemptError::Decode {
            message: "expected value".to_string(),
        };
        assert_eq!(classify_attempt(&err), RetryDirective::FailNow);
    }
}
