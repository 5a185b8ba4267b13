//! Retry loop: run an async operation until success or policy says stop.

use std::future::Future;
use std::time::Duration;

use super::policy::{RetryDecision, RetryPolicy};
use crate::failure::AsRawFailure;
use crate::parser::parse_with;
use crate::registry::Registry;

/// Waits out a backoff delay.
pub trait Sleeper {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(delay)
    }
}

/// Runs `op` until it succeeds or the retry policy says to stop.
///
/// Attempts are strictly sequential: each failure is parsed and classified,
/// and if retryable the full backoff elapses before the next call. When the
/// loop gives up the caller's own error value is returned unchanged.
pub async fn run_with_retry<S, F, Fut, T, E>(
    policy: &RetryPolicy,
    registry: &Registry,
    sleeper: &S,
    mut op: F,
) -> Result<T, E>
where
    S: Sleeper,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: AsRawFailure,
{
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let parsed = parse_with(registry, &err.to_raw_failure());
                match policy.decide(attempt, &parsed) {
                    RetryDecision::NoRetry => {
                        tracing::debug!(
                            attempt,
                            code = %parsed.code,
                            status = parsed.status_code,
                            "giving up"
                        );
                        return Err(err);
                    }
                    RetryDecision::RetryAfter(delay) => {
                        tracing::debug!(
                            attempt,
                            code = %parsed.code,
                            status = parsed.status_code,
                            delay_ms = delay.as_millis() as u64,
                            "retryable failure, backing off"
                        );
                        sleeper.sleep(delay).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}
