//! Error classification and retry engine.
//!
//! Failures come in as [`RawFailure`] values, get normalized into
//! [`ParsedError`] against the immutable [`Registry`], and are then
//! classified, shaped for callers, or retried with exponential backoff.

pub mod config;
pub mod logging;

pub mod classify;
pub mod diagnostics;
pub mod failure;
pub mod handle;
pub mod handler;
pub mod parser;
pub mod registry;
pub mod retry;

pub use failure::{AsRawFailure, Exception, RawFailure, ResponseFailure};
pub use handle::{
    api_response, format_for_display, handle, route_error_details, ApiErrorResponse,
    DisplayOptions, HandleOptions, HandledErrorResult,
};
pub use handler::{ErrorHandler, HandlerOptions, HandlerState};
pub use parser::{extract_code, parse, ParsedError, UNKNOWN_ERROR};
pub use registry::{Category, ErrorDescriptor, Registry};
pub use retry::{is_retryable, retry_delay_ms, RetryPolicy};
