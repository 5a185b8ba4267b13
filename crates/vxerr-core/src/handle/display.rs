//! One-line rendering of an error for display.

use crate::parser::ParsedError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Append ` (CODE)`.
    pub include_code: bool,
    /// Append ` [Category]`.
    pub include_category: bool,
    /// Use the developer message instead of the user message.
    pub technical: bool,
}

pub(crate) fn render(parsed: &ParsedError, opts: &DisplayOptions) -> String {
    let mut out = if opts.technical {
        parsed.message.clone()
    } else {
        parsed.user_message.clone()
    };
    if opts.include_code {
        out.push_str(&format!(" ({})", parsed.code));
    }
    if opts.include_category {
        out.push_str(&format!(" [{}]", parsed.category));
    }
    out
}
