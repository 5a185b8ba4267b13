//! Normalize raw failures into `ParsedError`.
//!
//! Dispatch follows the `RawFailure` variant:
//! 1. `Parsed`: returned unchanged.
//! 2. `Code`: registry lookup, else `UNKNOWN_ERROR` carrying the text.
//! 3. `Exception`: the first run of `[A-Z_]` in the message is tried as a
//!    code. This is best effort; any capitalised word matches, so a miss
//!    falls back to `UNKNOWN_ERROR` with the message.
//! 4. `Response`: code from `x-vercel-error` / `x-vercel-id`, else a
//!    synthesized `HTTP_<status>` error.
//! 5. `Unrecognized`: generic `UNKNOWN_ERROR`.
//!
//! Parsing never fails.

mod parsed;

pub use parsed::{ParsedError, UNKNOWN_ERROR};

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::failure::{RawFailure, ResponseFailure};
use crate::registry::{Category, Registry};

const UNKNOWN_CODE_DESCRIPTION: &str = "An unknown error occurred";
const UNEXPECTED_USER_MESSAGE: &str = "An unexpected error occurred";

static CODE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z_]+").expect("code pattern is valid"));

/// First maximal run of uppercase ASCII letters and underscores.
pub fn code_candidate(text: &str) -> Option<&str> {
    CODE_CANDIDATE.find(text).map(|m| m.as_str())
}

pub fn parse(raw: &RawFailure) -> ParsedError {
    parse_with(Registry::global(), raw)
}

pub fn parse_with(registry: &Registry, raw: &RawFailure) -> ParsedError {
    let original = || Some(Arc::new(raw.clone()));
    match raw {
        RawFailure::Parsed(parsed) => parsed.clone(),
        RawFailure::Code(code) => match registry.lookup(code) {
            Some(d) => ParsedError::from_descriptor(d, original()),
            None => ParsedError::unknown(code, code, UNKNOWN_CODE_DESCRIPTION, original()),
        },
        RawFailure::Exception(e) => {
            let known = code_candidate(&e.message).and_then(|c| registry.lookup(c));
            let parsed = match known {
                Some(d) => ParsedError::from_descriptor(d, original()),
                None => {
                    let user_message = if e.message.is_empty() {
                        UNEXPECTED_USER_MESSAGE
                    } else {
                        e.message.as_str()
                    };
                    ParsedError::unknown(&e.message, user_message, &e.message, original())
                }
            };
            parsed.with_stack(e.stack.clone())
        }
        RawFailure::Response(response) => parse_response(registry, response, original()),
        RawFailure::Unrecognized(_) => ParsedError::unknown(
            UNKNOWN_CODE_DESCRIPTION,
            "An unexpected error occurred. Please try again.",
            "Unable to parse error information",
            original(),
        ),
    }
}

fn parse_response(
    registry: &Registry,
    response: &ResponseFailure,
    original: Option<Arc<RawFailure>>,
) -> ParsedError {
    let status = response.status;
    let header_code = response
        .header("x-vercel-error")
        .or_else(|| response.header("x-vercel-id"));
    if let Some(d) = header_code.and_then(|c| registry.lookup(c)) {
        return ParsedError::from_descriptor(d, original).with_http_status(status);
    }

    let fallback = format!("Server returned an error ({status})");
    ParsedError {
        code: format!("HTTP_{status}"),
        category: Category::Http,
        status_code: status,
        message: response
            .status_text
            .clone()
            .unwrap_or_else(|| format!("HTTP {status} Error")),
        description: response.status_text.clone().unwrap_or_default(),
        user_message: registry.user_friendly_message(None, &fallback).to_string(),
        actionable: (400..500).contains(&status),
        contact_support: false,
        stack: None,
        http_status: Some(status),
        original_error: original,
    }
}

/// Best-effort code extraction without building a `ParsedError`.
///
/// Unlike `parse`, the result is not checked against the registry, and for
/// responses it reads `x-vercel-error` and then the body's `error.code`.
pub fn extract_code(raw: &RawFailure) -> Option<String> {
    match raw {
        RawFailure::Code(code) => (!code.is_empty()).then(|| code.clone()),
        RawFailure::Parsed(parsed) if !parsed.code.is_empty() => Some(parsed.code.clone()),
        RawFailure::Parsed(parsed) => code_candidate(&parsed.message).map(str::to_string),
        RawFailure::Exception(e) => code_candidate(&e.message).map(str::to_string),
        RawFailure::Response(response) => response
            .header("x-vercel-error")
            .map(str::to_string)
            .or_else(|| {
                response
                    .data_error_code
                    .clone()
                    .filter(|c| !c.is_empty())
            }),
        RawFailure::Unrecognized(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Exception;

    #[test]
    fn every_registry_code_parses_to_its_descriptor() {
        let registry = Registry::global();
        for d in registry.iter() {
            let parsed = parse(&RawFailure::code(d.code));
            assert_eq!(parsed.code, d.code);
            assert_eq!(parsed.status_code, d.status_code, "{}", d.code);
            assert_eq!(parsed.category, d.category, "{}", d.code);
            assert_eq!(
                parsed.original_error.as_deref(),
                Some(&RawFailure::code(d.code))
            );
        }
    }

    #[test]
    fn unknown_code_string() {
        let parsed = parse(&RawFailure::code("totally not a code"));
        assert_eq!(parsed.code, UNKNOWN_ERROR);
        assert_eq!(parsed.message, "totally not a code");
        assert_eq!(parsed.user_message, "totally not a code");
        assert_eq!(parsed.category, Category::Unknown);
        assert_eq!(parsed.status_code, 500);
        assert!(parsed.actionable);
    }

    #[test]
    fn exception_with_code_in_message() {
        let raw = RawFailure::from(
            Exception::new("DNS_HOSTNAME_RESOLVE_FAILED while fetching").with_stack("at fetch"),
        );
        let parsed = parse(&raw);
        assert_eq!(parsed.code, "DNS_HOSTNAME_RESOLVE_FAILED");
        assert_eq!(parsed.category, Category::Dns);
        assert_eq!(parsed.stack.as_deref(), Some("at fetch"));
    }

    #[test]
    fn exception_extraction_takes_the_first_run_only() {
        // "E" from "Error" is the first run, so the real code is never tried.
        let parsed = parse(&RawFailure::from(Exception::new("Error: FUNCTION_THROTTLED")));
        assert!(parsed.is_unknown());
        assert_eq!(parsed.message, "Error: FUNCTION_THROTTLED");
        assert_eq!(parsed.user_message, "Error: FUNCTION_THROTTLED");
        assert_eq!(parsed.description, "Error: FUNCTION_THROTTLED");
    }

    #[test]
    fn exception_without_message() {
        let parsed = parse(&RawFailure::from(Exception::new("")));
        assert!(parsed.is_unknown());
        assert_eq!(parsed.user_message, "An unexpected error occurred");
    }

    #[test]
    fn response_with_known_header_code() {
        let raw = RawFailure::from(
            ResponseFailure::new(502).with_header("x-vercel-id", "ROUTER_CANNOT_MATCH"),
        );
        let parsed = parse(&raw);
        assert_eq!(parsed.code, "ROUTER_CANNOT_MATCH");
        assert_eq!(parsed.http_status, Some(502));
        assert_eq!(parsed.category, Category::Routing);
    }

    #[test]
    fn error_header_wins_over_id_header() {
        let raw = RawFailure::from(
            ResponseFailure::new(500)
                .with_header("x-vercel-id", "ROUTER_CANNOT_MATCH")
                .with_header("x-vercel-error", "INTERNAL_CACHE_ERROR"),
        );
        assert_eq!(parse(&raw).code, "INTERNAL_CACHE_ERROR");
    }

    #[test]
    fn response_without_known_code_is_synthesized() {
        let parsed = parse(&RawFailure::from(
            ResponseFailure::new(404)
                .with_status_text("Not Found")
                .with_header("x-vercel-id", "fra1::abc123"),
        ));
        assert_eq!(parsed.code, "HTTP_404");
        assert_eq!(parsed.category, Category::Http);
        assert_eq!(parsed.status_code, 404);
        assert_eq!(parsed.message, "Not Found");
        assert_eq!(parsed.user_message, "Server returned an error (404)");
        assert!(parsed.actionable);
        assert_eq!(parsed.http_status, Some(404));

        let parsed = parse(&RawFailure::from(ResponseFailure::new(503)));
        assert_eq!(parsed.message, "HTTP 503 Error");
        assert!(!parsed.actionable);
    }

    #[test]
    fn unrecognized_falls_back() {
        let parsed = parse(&RawFailure::Unrecognized(None));
        assert!(parsed.is_unknown());
        assert_eq!(parsed.message, "An unknown error occurred");
        assert_eq!(
            parsed.user_message,
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn reparsing_is_idempotent() {
        let inputs = [
            RawFailure::code("FUNCTION_THROTTLED"),
            RawFailure::code("whatever"),
            RawFailure::from(Exception::new("boom").with_stack("s")),
            RawFailure::from(ResponseFailure::new(418)),
            RawFailure::Unrecognized(None),
        ];
        for raw in inputs {
            let once = parse(&raw);
            let twice = parse(&RawFailure::Parsed(once.clone()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn extract_code_per_shape() {
        assert_eq!(extract_code(&RawFailure::code("ANY")), Some("ANY".to_string()));
        assert_eq!(extract_code(&RawFailure::code("")), None);
        assert_eq!(
            extract_code(&RawFailure::from(Exception::new("lower then UPPER_RUN"))),
            Some("UPPER_RUN".to_string())
        );
        assert_eq!(extract_code(&RawFailure::from(Exception::new("all lower"))), None);
        assert_eq!(
            extract_code(&RawFailure::from(
                ResponseFailure::new(500).with_data_error_code("BODY_CODE")
            )),
            Some("BODY_CODE".to_string())
        );
        assert_eq!(
            extract_code(&RawFailure::from(
                ResponseFailure::new(500)
                    .with_header("x-vercel-error", "HEADER_CODE")
                    .with_data_error_code("BODY_CODE")
            )),
            Some("HEADER_CODE".to_string())
        );
        assert_eq!(extract_code(&RawFailure::Unrecognized(None)), None);
        let parsed = parse(&RawFailure::code("URL_TOO_LONG"));
        assert_eq!(
            extract_code(&RawFailure::Parsed(parsed)),
            Some("URL_TOO_LONG".to_string())
        );
    }
}
