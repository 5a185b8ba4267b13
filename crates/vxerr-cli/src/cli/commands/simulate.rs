//! `vxerr simulate` – drive the retry loop against a scripted operation.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use vxerr_core::config::VxConfig;
use vxerr_core::retry::{Sleeper, TokioSleeper};
use vxerr_core::{ErrorHandler, HandledErrorResult, HandlerOptions, RawFailure};

use super::{print_json, read_failure};
use crate::cli::FailureArg;

/// Prints each wait and returns immediately.
struct PrintSleeper;

impl Sleeper for PrintSleeper {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> + Send {
        println!("  (would wait {} ms)", delay.as_millis());
        std::future::ready(())
    }
}

pub async fn run_simulate(
    cfg: &VxConfig,
    failure: &FailureArg,
    failures: u32,
    attempts: Option<u32>,
    dry_run: bool,
) -> Result<()> {
    let raw = read_failure(failure)?;
    let policy = cfg.retry_policy();
    let max_attempts = attempts.unwrap_or(policy.max_attempts);
    let options = HandlerOptions {
        auto_log: cfg.handling.log_diagnostics,
        show_details: cfg.handling.show_details,
    };

    let outcome = if dry_run {
        let mut handler = ErrorHandler::with_sleeper(options, PrintSleeper).policy(policy);
        drive(&mut handler, &raw, failures, max_attempts).await
    } else {
        let mut handler = ErrorHandler::with_sleeper(options, TokioSleeper).policy(policy);
        drive(&mut handler, &raw, failures, max_attempts).await
    };

    match outcome {
        Ok(calls) => println!("succeeded after {calls} call(s)"),
        Err(details) => {
            println!("gave up:");
            if let Some(details) = details {
                print_json(&details)?;
            }
        }
    }
    Ok(())
}

async fn drive<S: Sleeper>(
    handler: &mut ErrorHandler<S>,
    raw: &RawFailure,
    failures: u32,
    max_attempts: u32,
) -> std::result::Result<u32, Option<HandledErrorResult>> {
    let mut calls = 0u32;
    let result = handler
        .retry(
            || {
                calls += 1;
                let n = calls;
                println!("  attempt {n}");
                let outcome = if n <= failures {
                    Err(raw.clone())
                } else {
                    Ok(n)
                };
                async move { outcome }
            },
            max_attempts,
        )
        .await;
    result.map_err(|_| handler.details())
}
