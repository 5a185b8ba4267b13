//! `vxerr format` – one-line display message.

use anyhow::Result;
use vxerr_core::{format_for_display, DisplayOptions};

use super::read_failure;
use crate::cli::FailureArg;

pub fn run_format(failure: &FailureArg, code: bool, category: bool, technical: bool) -> Result<()> {
    let raw = read_failure(failure)?;
    let opts = DisplayOptions {
        include_code: code,
        include_category: category,
        technical,
    };
    println!("{}", format_for_display(&raw, &opts));
    Ok(())
}
