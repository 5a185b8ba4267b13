//! Handling facade: parse, optionally report, and shape an error for callers.
//!
//! Nothing here fails. Whatever comes in, callers get a fully populated
//! result back.

mod display;
mod result;

pub use display::DisplayOptions;
pub use result::{ApiErrorBody, ApiErrorResponse, HandledErrorResult};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticRecord, DiagnosticSink, TracingSink};
use crate::failure::RawFailure;
use crate::parser::parse_with;
use crate::registry::Registry;

/// Options for `handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleOptions {
    /// Emit a diagnostic record.
    pub log_diagnostics: bool,
    /// Include `description` and `technical_message` in the result.
    pub show_details: bool,
    /// Include the stack in the result and in the diagnostic record.
    pub include_stack: bool,
}

impl Default for HandleOptions {
    fn default() -> Self {
        Self {
            log_diagnostics: true,
            show_details: false,
            include_stack: false,
        }
    }
}

/// Handle against the global registry, reporting through `tracing`.
pub fn handle(raw: &RawFailure, opts: &HandleOptions) -> HandledErrorResult {
    handle_with(Registry::global(), &TracingSink, raw, opts)
}

pub fn handle_with(
    registry: &Registry,
    sink: &dyn DiagnosticSink,
    raw: &RawFailure,
    opts: &HandleOptions,
) -> HandledErrorResult {
    let parsed = parse_with(registry, raw);

    if opts.log_diagnostics {
        sink.emit(&DiagnosticRecord::from_parsed(&parsed, opts.include_stack));
    }

    // Actionability and support come from the registry entry for the code,
    // so codes the registry does not know get the classifier defaults.
    HandledErrorResult {
        actionable: registry.is_actionable(&parsed.code),
        contact_support: registry.should_contact_support(&parsed.code),
        description: opts.show_details.then(|| parsed.description.clone()),
        technical_message: opts.show_details.then(|| parsed.message.clone()),
        stack: if opts.include_stack {
            parsed.stack.clone()
        } else {
            None
        },
        code: parsed.code,
        message: parsed.user_message,
        category: parsed.category,
        status_code: parsed.status_code,
    }
}

/// Details for a route-level error page. A missing failure means the route
/// itself was not found. Diagnostics are not emitted here.
pub fn route_error_details(raw: Option<&RawFailure>) -> HandledErrorResult {
    match raw {
        Some(raw) => handle(
            raw,
            &HandleOptions {
                log_diagnostics: false,
                ..HandleOptions::default()
            },
        ),
        None => HandledErrorResult::not_found(),
    }
}

pub fn api_response(raw: &RawFailure) -> ApiErrorResponse {
    api_response_with(Registry::global(), raw)
}

/// Fixed response shape. Unlike `handle`, `actionable` and `contact_support`
/// are taken from the parsed error itself.
pub fn api_response_with(registry: &Registry, raw: &RawFailure) -> ApiErrorResponse {
    let parsed = parse_with(registry, raw);
    ApiErrorResponse {
        success: false,
        error: ApiErrorBody {
            code: parsed.code,
            message: parsed.user_message,
            category: parsed.category,
            status_code: parsed.status_code,
            actionable: parsed.actionable,
            contact_support: parsed.contact_support,
        },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn format_for_display(raw: &RawFailure, opts: &DisplayOptions) -> String {
    display::render(&parse_with(Registry::global(), raw), opts)
}
