//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "@".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_token(), "@");
}

#[test]
fn test_error_position() {
    let pos = Position::new(3, 42);
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos,
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "+".to_string(),
        },
        Position::new(1, 4),
    );

    assert_eq!(error.to_string(), "Unexpected token: `+` (at 1:4)");
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "CloseParen".to_string(),
            found: "EOF".to_string(),
        },
        Position::new(2, 1),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_token(), "EOF");
    assert_eq!(error.to_string(), "Expected `CloseParen`, found `EOF` (at 2:1)");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(format!("{}", tip), "Try this instead");

    let no_tip = ErrorTip::None;
    assert_eq!(format!("{}", no_tip), "");
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::UnexpectedToken {
        token: "}".to_string(),
    };

    assert_eq!(error.to_string(), "unexpected token: \"}\"");
}

#[test]
fn test_error_clone() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "test".to_string(),
        },
        Position::new(1, 1),
    );

    let cloned = error.clone();
    assert_eq!(cloned, error);
}
