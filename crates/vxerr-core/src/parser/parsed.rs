use serde::Serialize;
use std::sync::Arc;

use crate::failure::RawFailure;
use crate::registry::{Category, ErrorDescriptor};

/// Code given to every failure the registry cannot name.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// A descriptor plus what we learned from one particular failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedError {
    pub code: String,
    pub category: Category,
    pub status_code: u16,
    pub message: String,
    pub description: String,
    pub user_message: String,
    pub actionable: bool,
    pub contact_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Transport status, when it differs in kind from the nominal `status_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// The value this was parsed from. Never modified.
    #[serde(skip)]
    pub original_error: Option<Arc<RawFailure>>,
}

impl ParsedError {
    pub fn from_descriptor(d: &ErrorDescriptor, original: Option<Arc<RawFailure>>) -> Self {
        Self {
            code: d.code.to_string(),
            category: d.category,
            status_code: d.status_code,
            message: d.message.to_string(),
            description: d.description.to_string(),
            user_message: d.user_message.to_string(),
            actionable: d.actionable,
            contact_support: d.contact_support,
            stack: None,
            http_status: None,
            original_error: original,
        }
    }

    /// `UNKNOWN_ERROR`, category Unknown, status 500, actionable.
    pub fn unknown(
        message: impl Into<String>,
        user_message: impl Into<String>,
        description: impl Into<String>,
        original: Option<Arc<RawFailure>>,
    ) -> Self {
        Self {
            code: UNKNOWN_ERROR.to_string(),
            category: Category::Unknown,
            status_code: 500,
            message: message.into(),
            description: description.into(),
            user_message: user_message.into(),
            actionable: true,
            contact_support: false,
            stack: None,
            http_status: None,
            original_error: original,
        }
    }

    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_ERROR
    }
}
