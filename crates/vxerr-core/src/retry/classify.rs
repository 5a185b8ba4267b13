//! Classify parsed errors into retry policy error kinds.

use crate::parser::ParsedError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        408 => ErrorKind::Timeout,
        429 => ErrorKind::Throttled,
        500.. => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a parsed error. Known transient codes win over the status code.
pub fn classify(e: &ParsedError) -> ErrorKind {
    match e.code.as_str() {
        "FUNCTION_THROTTLED" => ErrorKind::Throttled,
        "FUNCTION_INVOCATION_TIMEOUT"
        | "EDGE_FUNCTION_INVOCATION_TIMEOUT"
        | "MIDDLEWARE_INVOCATION_TIMEOUT" => ErrorKind::Timeout,
        "DNS_HOSTNAME_SERVER_ERROR"
        | "ROUTER_EXTERNAL_TARGET_CONNECTION_ERROR"
        | "ROUTER_EXTERNAL_TARGET_HANDSHAKE_ERROR" => ErrorKind::Connection,
        _ => classify_http_status(e.status_code),
    }
}
