//! Total lookups over the registry. Unknown codes get fixed defaults.

use crate::registry::{Category, Registry};

/// Used by `user_friendly_message` callers that have nothing better to offer.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "An error occurred. Please try again.";

/// Status reported for codes the registry does not know.
pub const DEFAULT_STATUS_CODE: u16 = 500;

impl Registry {
    pub fn category(&self, code: &str) -> Category {
        self.lookup(code)
            .map(|d| d.category)
            .unwrap_or(Category::Unknown)
    }

    pub fn status_code(&self, code: &str) -> u16 {
        self.lookup(code)
            .map(|d| d.status_code)
            .unwrap_or(DEFAULT_STATUS_CODE)
    }

    /// Unknown codes are treated as actionable.
    pub fn is_actionable(&self, code: &str) -> bool {
        self.lookup(code).map(|d| d.actionable).unwrap_or(true)
    }

    pub fn should_contact_support(&self, code: &str) -> bool {
        self.lookup(code).map(|d| d.contact_support).unwrap_or(false)
    }

    pub fn user_friendly_message<'a>(&self, code: Option<&str>, fallback: &'a str) -> &'a str {
        match code.and_then(|c| self.lookup(c)) {
            Some(d) => d.user_message,
            None => fallback,
        }
    }
}

pub fn category(code: &str) -> Category {
    Registry::global().category(code)
}

pub fn status_code(code: &str) -> u16 {
    Registry::global().status_code(code)
}

pub fn is_actionable(code: &str) -> bool {
    Registry::global().is_actionable(code)
}

pub fn should_contact_support(code: &str) -> bool {
    Registry::global().should_contact_support(code)
}

pub fn user_friendly_message<'a>(code: Option<&str>, fallback: &'a str) -> &'a str {
    Registry::global().user_friendly_message(code, fallback)
}
