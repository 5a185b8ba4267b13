//! `vxerr extract` – best-effort code extraction.

use anyhow::Result;
use vxerr_core::extract_code;

use super::read_failure;
use crate::cli::FailureArg;

pub fn run_extract(failure: &FailureArg) -> Result<()> {
    let raw = read_failure(failure)?;
    match extract_code(&raw) {
        Some(code) => println!("{code}"),
        None => println!("-"),
    }
    Ok(())
}
