//! `vxerr backoff` – retryability and planned delays for a failure.

use anyhow::Result;
use vxerr_core::config::VxConfig;
use vxerr_core::parse;
use vxerr_core::retry::{classify, RetryDecision};

use super::read_failure;
use crate::cli::FailureArg;

pub fn run_backoff(cfg: &VxConfig, failure: &FailureArg, attempts: Option<u32>) -> Result<()> {
    let raw = read_failure(failure)?;
    let mut policy = cfg.retry_policy();
    if let Some(n) = attempts {
        policy = policy.with_max_attempts(n);
    }
    let parsed = parse(&raw);
    println!(
        "{} (status {}): {:?}, retryable: {}",
        parsed.code,
        parsed.status_code,
        classify(&parsed),
        policy.is_retryable(&parsed)
    );
    for attempt in 1..=policy.max_attempts {
        match policy.decide(attempt, &parsed) {
            RetryDecision::RetryAfter(d) => {
                println!("  attempt {attempt} fails -> wait {} ms", d.as_millis())
            }
            RetryDecision::NoRetry => {
                println!("  attempt {attempt} fails -> give up");
                break;
            }
        }
    }
    Ok(())
}
