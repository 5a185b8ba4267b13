use std::time::Duration;

use super::classify::classify;
use crate::parser::ParsedError;

/// High-level classification of a parsed error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request or invocation timed out (408, `*_INVOCATION_TIMEOUT`).
    Timeout,
    /// Asked to slow down (429, `FUNCTION_THROTTLED`).
    Throttled,
    /// Upstream connection failure (DNS server, external routing target).
    Connection,
    /// Any other status of 500 or above.
    Http5xx(u16),
    /// Anything else (not retried).
    Other,
}

impl ErrorKind {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorKind::Other)
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy with a cap and per-kind floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles for each one after.
    pub base_delay: Duration,
    /// Upper bound on the exponential delay.
    pub max_delay: Duration,
    /// Minimum delay after `FUNCTION_THROTTLED`.
    pub throttled_floor: Duration,
    /// Minimum delay after a 429.
    pub rate_limited_floor: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
            throttled_floor: Duration::from_secs(5),
            rate_limited_floor: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn is_retryable(&self, e: &ParsedError) -> bool {
        classify(e).is_retryable()
    }

    /// `base * 2^(attempt-1)`, capped at `max_delay`. `attempt` is 1-based.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }

    /// Backoff for `attempt`, raised to the throttling and rate-limit floors
    /// when they apply. The floors are checked independently.
    pub fn retry_delay(&self, e: &ParsedError, attempt: u32) -> Duration {
        let mut delay = self.backoff(attempt);
        if e.code == "FUNCTION_THROTTLED" {
            delay = delay.max(self.throttled_floor);
        }
        if e.status_code == 429 {
            delay = delay.max(self.rate_limited_floor);
        }
        delay
    }

    /// Whether to try again after `attempt` failed with `e`, and how long to wait.
    pub fn decide(&self, attempt: u32, e: &ParsedError) -> RetryDecision {
        if attempt >= self.max_attempts || !self.is_retryable(e) {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.retry_delay(e, attempt))
    }
}

/// Retryability under the default policy.
pub fn is_retryable(e: &ParsedError) -> bool {
    RetryPolicy::default().is_retryable(e)
}

/// Delay in milliseconds under the default policy.
pub fn retry_delay_ms(e: &ParsedError, attempt: u32) -> u64 {
    RetryPolicy::default().retry_delay(e, attempt).as_millis() as u64
}
