//! `vxerr classify` – registry classification for one code.

use anyhow::Result;
use vxerr_core::classify;
use vxerr_core::retry::{classify as retry_kind, RetryPolicy};
use vxerr_core::{parse, RawFailure, Registry};

pub fn run_classify(code: &str) -> Result<()> {
    let registry = Registry::global();
    if !registry.contains(code) {
        println!("{code}: not in registry (treated as UNKNOWN_ERROR)");
    }
    let parsed = parse(&RawFailure::code(code));
    println!("code:            {}", parsed.code);
    println!("category:        {}", classify::category(code));
    println!("status:          {}", classify::status_code(code));
    println!("actionable:      {}", classify::is_actionable(code));
    println!("contact support: {}", classify::should_contact_support(code));
    println!(
        "retryable:       {} ({:?})",
        RetryPolicy::default().is_retryable(&parsed),
        retry_kind(&parsed)
    );
    if let Some(layer) = registry.layer_of(code) {
        println!("layer:           {layer}");
    }
    println!(
        "user message:    {}",
        classify::user_friendly_message(Some(code), classify::DEFAULT_FALLBACK_MESSAGE)
    );
    Ok(())
}
