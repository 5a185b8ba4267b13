//! CLI command handlers, one per file.

mod backoff;
mod classify;
mod extract;
mod format;
mod handle;
mod list;
mod respond;
mod simulate;

pub use backoff::run_backoff;
pub use classify::run_classify;
pub use extract::run_extract;
pub use format::run_format;
pub use handle::run_handle;
pub use list::run_list;
pub use respond::run_respond;
pub use simulate::run_simulate;

use anyhow::{Context, Result};
use vxerr_core::RawFailure;

use super::FailureArg;

/// Turn the command-line input into a raw failure.
pub(crate) fn read_failure(arg: &FailureArg) -> Result<RawFailure> {
    if !arg.json {
        return Ok(RawFailure::code(arg.input.as_str()));
    }
    let value: serde_json::Value =
        serde_json::from_str(&arg.input).context("INPUT is not valid JSON")?;
    Ok(RawFailure::from_value(&value))
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
