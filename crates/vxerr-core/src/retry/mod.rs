//! Retry and backoff policy.
//!
//! This module decides whether a parsed error is worth another attempt,
//! computes exponential backoff with throttling floors, and drives the
//! async retry loop used by `ErrorHandler`.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_http_status};
pub use policy::{is_retryable, retry_delay_ms, ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, Sleeper, TokioSleeper};

#[cfg(test)]
pub(crate) use run::testing;
