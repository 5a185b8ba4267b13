use serde::Serialize;

use crate::registry::Category;

/// Caller-facing summary of a handled error.
///
/// `message` is always the user-facing text; the developer text is only
/// present as `technical_message` when details were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandledErrorResult {
    pub code: String,
    pub message: String,
    pub category: Category,
    pub status_code: u16,
    pub actionable: bool,
    pub contact_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl HandledErrorResult {
    /// Shown for a route-level error page when no failure was passed in.
    pub fn not_found() -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: "The page you're looking for doesn't exist.".to_string(),
            category: Category::Deployment,
            status_code: 404,
            actionable: true,
            contact_support: false,
            description: None,
            technical_message: None,
            stack: None,
        }
    }
}

/// Error body for programmatic consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub category: Category,
    pub status_code: u16,
    pub actionable: bool,
    pub contact_support: bool,
}

/// `{ success: false, error: {...}, timestamp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}
