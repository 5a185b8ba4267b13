//! Tests for handle, respond and format.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_handle_defaults() {
    match parse(&["vxerr", "handle", "NOT_FOUND"]) {
        CliCommand::Handle {
            failure,
            details,
            stack,
        } => {
            assert_eq!(failure.input, "NOT_FOUND");
            assert!(!failure.json);
            assert!(!details);
            assert!(!stack);
        }
        _ => panic!("expected Handle"),
    }
}

#[test]
fn cli_parse_handle_flags() {
    match parse(&[
        "vxerr",
        "handle",
        "--json",
        r#"{"response":{"status":503}}"#,
        "--details",
        "--stack",
    ]) {
        CliCommand::Handle {
            failure,
            details,
            stack,
        } => {
            assert!(failure.json);
            assert!(details);
            assert!(stack);
        }
        _ => panic!("expected Handle with flags"),
    }
}

#[test]
fn cli_parse_respond() {
    match parse(&["vxerr", "respond", "INTERNAL_CACHE_ERROR"]) {
        CliCommand::Respond { failure } => assert_eq!(failure.input, "INTERNAL_CACHE_ERROR"),
        _ => panic!("expected Respond"),
    }
}

#[test]
fn cli_parse_format() {
    match parse(&["vxerr", "format", "URL_TOO_LONG", "--code", "--technical"]) {
        CliCommand::Format {
            failure,
            code,
            category,
            technical,
        } => {
            assert_eq!(failure.input, "URL_TOO_LONG");
            assert!(code);
            assert!(!category);
            assert!(technical);
        }
        _ => panic!("expected Format"),
    }
}
