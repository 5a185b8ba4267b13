//! Raw failure values accepted by the parser.
//!
//! Callers hand over whatever went wrong; `RawFailure` names the shapes we
//! understand. `RawFailure::from_value` inspects loosely-typed JSON once and
//! picks the variant, in the same precedence the parser uses.

use serde_json::{Map, Value};
use std::error::Error as StdError;

use crate::parser::ParsedError;
use crate::registry::{Category, Registry};

/// A failure as produced by the caller's operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RawFailure {
    /// Bare error code text, e.g. `"FUNCTION_THROTTLED"`.
    #[error("{0}")]
    Code(String),
    /// Native error with message and optional stack text.
    #[error(transparent)]
    Exception(Exception),
    /// Failed HTTP response.
    #[error(transparent)]
    Response(ResponseFailure),
    /// Already classified; parsing returns it unchanged.
    #[error("{}: {}", .0.code, .0.message)]
    Parsed(ParsedError),
    /// Anything else. Holds a rendering of the value when there is one.
    #[error("unrecognized failure")]
    Unrecognized(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Exception {
    pub message: String,
    pub stack: Option<String>,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// The parts of a failed HTTP response the parser looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("HTTP {status}{}", .status_text.as_deref().map(|t| format!(" {t}")).unwrap_or_default())]
pub struct ResponseFailure {
    pub status: u16,
    pub status_text: Option<String>,
    /// Header name/value pairs as received.
    pub headers: Vec<(String, String)>,
    /// `error.code` from the response body, if the body had one.
    pub data_error_code: Option<String>,
}

impl ResponseFailure {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_data_error_code(mut self, code: impl Into<String>) -> Self {
        self.data_error_code = Some(code.into());
        self
    }

    /// First header named `name` (case-insensitive) with a non-empty value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, v)| k.trim().eq_ignore_ascii_case(name) && !v.trim().is_empty())
            .map(|(_, v)| v.trim())
    }
}

impl RawFailure {
    pub fn code(code: impl Into<String>) -> Self {
        RawFailure::Code(code.into())
    }

    /// Capture a Rust error as an exception. The `source()` chain becomes the stack text.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        RawFailure::Exception(Exception {
            message: err.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
        })
    }

    /// Pick the variant for a loosely-typed value against the global registry.
    pub fn from_value(value: &Value) -> Self {
        Self::from_value_with(Registry::global(), value)
    }

    /// First match wins: object with a `code` -> `Parsed`; string -> `Code`;
    /// object with a string `message` -> `Exception`; object with a numeric
    /// `response.status` -> `Response`; anything else -> `Unrecognized`.
    pub fn from_value_with(registry: &Registry, value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                if let Some(code) = map.get("code").and_then(code_text) {
                    return RawFailure::Parsed(parsed_from_object(registry, code, map));
                }
                if let Some(message) = map.get("message").and_then(Value::as_str) {
                    return RawFailure::Exception(Exception {
                        message: message.to_string(),
                        stack: str_field(map, "stack"),
                    });
                }
                if let Some(response) = response_from_object(map) {
                    return RawFailure::Response(response);
                }
                RawFailure::Unrecognized(Some(value.to_string()))
            }
            Value::String(s) => RawFailure::Code(s.clone()),
            Value::Null => RawFailure::Unrecognized(None),
            other => RawFailure::Unrecognized(Some(other.to_string())),
        }
    }
}

fn code_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn u16_field(map: &Map<String, Value>, key: &str) -> Option<u16> {
    map.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u16::try_from(n).ok())
}

/// Missing fields are filled from the registry entry for `code`, if any.
fn parsed_from_object(registry: &Registry, code: String, map: &Map<String, Value>) -> ParsedError {
    let known = registry.lookup(&code);
    let message = str_field(map, "message")
        .or_else(|| known.map(|d| d.message.to_string()))
        .unwrap_or_default();
    ParsedError {
        category: map
            .get("category")
            .and_then(Value::as_str)
            .and_then(|c| c.parse::<Category>().ok())
            .unwrap_or_else(|| registry.category(&code)),
        status_code: u16_field(map, "statusCode").unwrap_or_else(|| registry.status_code(&code)),
        description: str_field(map, "description")
            .or_else(|| known.map(|d| d.description.to_string()))
            .unwrap_or_default(),
        user_message: str_field(map, "userMessage")
            .or_else(|| known.map(|d| d.user_message.to_string()))
            .unwrap_or_else(|| message.clone()),
        actionable: map
            .get("actionable")
            .and_then(Value::as_bool)
            .unwrap_or_else(|| registry.is_actionable(&code)),
        contact_support: map
            .get("contactSupport")
            .and_then(Value::as_bool)
            .unwrap_or_else(|| registry.should_contact_support(&code)),
        stack: str_field(map, "stack"),
        http_status: u16_field(map, "httpStatus"),
        original_error: None,
        message,
        code,
    }
}

fn response_from_object(map: &Map<String, Value>) -> Option<ResponseFailure> {
    let response = map.get("response")?.as_object()?;
    let status = u16_field(response, "status")?;
    let headers = response
        .get("headers")
        .and_then(Value::as_object)
        .map(|h| {
            h.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default();
    let data_error_code = response
        .get("data")
        .and_then(|d| d.get("error"))
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(ResponseFailure {
        status,
        status_text: str_field(response, "statusText").filter(|t| !t.is_empty()),
        headers,
        data_error_code,
    })
}

/// Borrowing view of a caller's error as a `RawFailure`, so it can be
/// classified and still be handed back untouched.
pub trait AsRawFailure {
    fn to_raw_failure(&self) -> RawFailure;
}

impl AsRawFailure for RawFailure {
    fn to_raw_failure(&self) -> RawFailure {
        self.clone()
    }
}

impl AsRawFailure for ParsedError {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::Parsed(self.clone())
    }
}

impl AsRawFailure for Exception {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::Exception(self.clone())
    }
}

impl AsRawFailure for ResponseFailure {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::Response(self.clone())
    }
}

impl AsRawFailure for str {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::Code(self.to_string())
    }
}

impl AsRawFailure for String {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::Code(self.clone())
    }
}

impl AsRawFailure for Value {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::from_value(self)
    }
}

impl AsRawFailure for anyhow::Error {
    fn to_raw_failure(&self) -> RawFailure {
        let err: &(dyn StdError + 'static) = self.as_ref();
        RawFailure::from_error(err)
    }
}

impl AsRawFailure for std::io::Error {
    fn to_raw_failure(&self) -> RawFailure {
        RawFailure::from_error(self)
    }
}

impl<T: AsRawFailure + ?Sized> AsRawFailure for &T {
    fn to_raw_failure(&self) -> RawFailure {
        (**self).to_raw_failure()
    }
}

impl From<&str> for RawFailure {
    fn from(code: &str) -> Self {
        RawFailure::Code(code.to_string())
    }
}

impl From<String> for RawFailure {
    fn from(code: String) -> Self {
        RawFailure::Code(code)
    }
}

impl From<Exception> for RawFailure {
    fn from(e: Exception) -> Self {
        RawFailure::Exception(e)
    }
}

impl From<ResponseFailure> for RawFailure {
    fn from(r: ResponseFailure) -> Self {
        RawFailure::Response(r)
    }
}

impl From<ParsedError> for RawFailure {
    fn from(p: ParsedError) -> Self {
        RawFailure::Parsed(p)
    }
}
