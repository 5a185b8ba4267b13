//! Diagnostic records emitted when an error is handled.

use serde::Serialize;

use crate::parser::ParsedError;
use crate::registry::Category;

/// What the facade reports about a handled error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub code: String,
    pub message: String,
    pub category: Category,
    pub status_code: u16,
    /// Debug rendering of the original failure.
    pub original: Option<String>,
    pub stack: Option<String>,
}

impl DiagnosticRecord {
    pub fn from_parsed(parsed: &ParsedError, include_stack: bool) -> Self {
        Self {
            code: parsed.code.clone(),
            message: parsed.message.clone(),
            category: parsed.category,
            status_code: parsed.status_code,
            original: parsed.original_error.as_ref().map(|o| format!("{o:?}")),
            stack: if include_stack {
                parsed.stack.clone()
            } else {
                None
            },
        }
    }
}

/// Receives diagnostic records. `emit` cannot report failure, so a broken
/// sink never affects classification.
pub trait DiagnosticSink {
    fn emit(&self, record: &DiagnosticRecord);
}

/// Emits each record as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, record: &DiagnosticRecord) {
        tracing::error!(
            code = %record.code,
            category = %record.category,
            status = record.status_code,
            original = record.original.as_deref().unwrap_or("-"),
            stack = record.stack.as_deref(),
            "error handled: {}",
            record.message
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub(crate) struct MemorySink {
        pub records: Mutex<Vec<DiagnosticRecord>>,
    }

    impl MemorySink {
        pub(crate) fn records(&self) -> Vec<DiagnosticRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for MemorySink {
        fn emit(&self, record: &DiagnosticRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{Exception, RawFailure};
    use crate::parser::parse;

    #[test]
    fn stack_only_when_requested() {
        let parsed = parse(&RawFailure::from(Exception::new("boom").with_stack("at main")));
        let without = DiagnosticRecord::from_parsed(&parsed, false);
        let with = DiagnosticRecord::from_parsed(&parsed, true);
        assert!(without.stack.is_none());
        assert_eq!(with.stack.as_deref(), Some("at main"));
        assert_eq!(with.code, "UNKNOWN_ERROR");
        assert!(with.original.unwrap().contains("boom"));
    }

    #[test]
    fn tracing_sink_accepts_records_without_subscriber() {
        let parsed = parse(&RawFailure::code("NOT_FOUND"));
        TracingSink.emit(&DiagnosticRecord::from_parsed(&parsed, true));
    }
}
