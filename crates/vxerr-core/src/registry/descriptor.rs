//! Static error descriptors and their category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad family an error code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Function,
    Deployment,
    #[serde(rename = "DNS")]
    Dns,
    Cache,
    Runtime,
    Image,
    Request,
    Routing,
    Sandbox,
    Internal,
    #[default]
    Unknown,
    #[serde(rename = "HTTP")]
    Http,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Function,
        Category::Deployment,
        Category::Dns,
        Category::Cache,
        Category::Runtime,
        Category::Image,
        Category::Request,
        Category::Routing,
        Category::Sandbox,
        Category::Internal,
        Category::Unknown,
        Category::Http,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Function => "Function",
            Category::Deployment => "Deployment",
            Category::Dns => "DNS",
            Category::Cache => "Cache",
            Category::Runtime => "Runtime",
            Category::Image => "Image",
            Category::Request => "Request",
            Category::Routing => "Routing",
            Category::Sandbox => "Sandbox",
            Category::Internal => "Internal",
            Category::Unknown => "Unknown",
            Category::Http => "HTTP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category name does not match any known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One registry entry: everything known about an error code ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDescriptor {
    pub code: &'static str,
    pub category: Category,
    /// Nominal HTTP status for the code.
    pub status_code: u16,
    /// Developer-facing summary.
    pub message: &'static str,
    pub description: &'static str,
    /// Safe to show to end users.
    pub user_message: &'static str,
    /// Whether the user can do something about it (retry, fix input, ...).
    pub actionable: bool,
    pub contact_support: bool,
}

impl ErrorDescriptor {
    /// Actionable, no support contact. Use the modifiers below for deviations.
    pub const fn new(
        code: &'static str,
        category: Category,
        status_code: u16,
        message: &'static str,
        description: &'static str,
        user_message: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            status_code,
            message,
            description,
            user_message,
            actionable: true,
            contact_support: false,
        }
    }

    pub const fn not_actionable(self) -> Self {
        Self {
            actionable: false,
            ..self
        }
    }

    pub const fn contact_support(self) -> Self {
        Self {
            contact_support: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_matches_wire_names() {
        assert_eq!(Category::Dns.to_string(), "DNS");
        assert_eq!(Category::Http.to_string(), "HTTP");
        assert_eq!(Category::Routing.to_string(), "Routing");
        assert_eq!(serde_json::to_string(&Category::Dns).unwrap(), "\"DNS\"");
        assert_eq!(serde_json::to_string(&Category::Sandbox).unwrap(), "\"Sandbox\"");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("dns".parse::<Category>().unwrap(), Category::Dns);
        assert_eq!(" Internal ".parse::<Category>().unwrap(), Category::Internal);
        assert!("network".parse::<Category>().is_err());
    }

    #[test]
    fn descriptor_defaults_and_modifiers() {
        const D: ErrorDescriptor =
            ErrorDescriptor::new("X_CODE", Category::Cache, 502, "m", "d", "u");
        assert!(D.actionable);
        assert!(!D.contact_support);
        let d = D.not_actionable().contact_support();
        assert!(!d.actionable);
        assert!(d.contact_support);
        assert_eq!(d.code, "X_CODE");
    }
}
