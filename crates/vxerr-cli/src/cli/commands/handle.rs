//! `vxerr handle` – caller-facing result for a failure.

use anyhow::Result;
use vxerr_core::config::VxConfig;
use vxerr_core::{handle, HandleOptions};

use super::{print_json, read_failure};
use crate::cli::FailureArg;

/// Flags only switch options on; everything else comes from `[handling]` in the config.
pub fn run_handle(cfg: &VxConfig, failure: &FailureArg, details: bool, stack: bool) -> Result<()> {
    let raw = read_failure(failure)?;
    let opts = HandleOptions {
        show_details: cfg.handling.show_details || details,
        include_stack: cfg.handling.include_stack || stack,
        ..cfg.handling
    };
    print_json(&handle(&raw, &opts))
}
