//! Tests for classify, list, extract and backoff.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_classify() {
    match parse(&["vxerr", "classify", "FUNCTION_THROTTLED"]) {
        CliCommand::Classify { code } => assert_eq!(code, "FUNCTION_THROTTLED"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_list() {
    match parse(&["vxerr", "list"]) {
        CliCommand::List { category } => assert!(category.is_none()),
        _ => panic!("expected List"),
    }
    match parse(&["vxerr", "list", "--category", "DNS"]) {
        CliCommand::List { category } => assert_eq!(category.as_deref(), Some("DNS")),
        _ => panic!("expected List with --category"),
    }
}

#[test]
fn cli_parse_extract_json() {
    match parse(&["vxerr", "extract", "--json", r#"{"message":"X_Y"}"#]) {
        CliCommand::Extract { failure } => {
            assert!(failure.json);
            assert_eq!(failure.input, r#"{"message":"X_Y"}"#);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_backoff() {
    match parse(&["vxerr", "backoff", "HTTP_429", "--attempts", "6"]) {
        CliCommand::Backoff { failure, attempts } => {
            assert_eq!(failure.input, "HTTP_429");
            assert!(!failure.json);
            assert_eq!(attempts, Some(6));
        }
        _ => panic!("expected Backoff"),
    }
}

#[test]
fn cli_parse_simulate_defaults() {
    match parse(&["vxerr", "simulate", "FUNCTION_INVOCATION_TIMEOUT"]) {
        CliCommand::Simulate {
            failures,
            attempts,
            dry_run,
            ..
        } => {
            assert_eq!(failures, 2);
            assert!(attempts.is_none());
            assert!(!dry_run);
        }
        _ => panic!("expected Simulate"),
    }
}

#[test]
fn cli_parse_simulate_flags() {
    match parse(&[
        "vxerr",
        "simulate",
        "DNS_HOSTNAME_SERVER_ERROR",
        "--failures",
        "5",
        "--attempts",
        "4",
        "--dry-run",
    ]) {
        CliCommand::Simulate {
            failure,
            failures,
            attempts,
            dry_run,
        } => {
            assert_eq!(failure.input, "DNS_HOSTNAME_SERVER_ERROR");
            assert_eq!(failures, 5);
            assert_eq!(attempts, Some(4));
            assert!(dry_run);
        }
        _ => panic!("expected Simulate"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["vxerr"]).is_err());
    assert!(Cli::try_parse_from(["vxerr", "classify"]).is_err());
}
