//! `vxerr respond` – API error response body.

use anyhow::Result;
use vxerr_core::api_response;

use super::{print_json, read_failure};
use crate::cli::FailureArg;

pub fn run_respond(failure: &FailureArg) -> Result<()> {
    let raw = read_failure(failure)?;
    print_json(&api_response(&raw))
}
