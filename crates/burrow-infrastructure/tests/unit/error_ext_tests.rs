//! Unit tests for error context helpers

use burrow_domain::Error;
use burrow_infrastructure::ErrorContext;
use std::error::Error as StdError;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::other("disk full"))
}

#[test]
fn test_context_wraps_as_io_error() {
    let err = io_failure().context("Failed to write snapshot").unwrap_err();

    match &err {
        Error::Io { message, .. } => {
            assert_eq!(message, "Failed to write snapshot: disk full");
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
}

#[test]
fn test_with_context_is_evaluated_lazily() {
    let ok: Result<u8, io::Error> = Ok(3);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 3);

    let err = io_failure()
        .with_context(|| format!("Failed to open {}", "burrow.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to open burrow.toml"));
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let err = io_failure().config_context("Bad settings").unwrap_err();

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().starts_with("Configuration error: Bad settings"));
}
