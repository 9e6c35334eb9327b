//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenCategory;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.is_lexical());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "3.".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert!(error.is_lexical());
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenCategory::Parenthesis,
            expected_lexeme: Some(")".to_string()),
            found: TokenCategory::EndOfInput,
            token: "$".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert!(!error.is_lexical());
    assert_eq!(
        error.kind().to_string(),
        "syntax error: expecting Parenthesis `)`; saw EndOfInput \"$\""
    );
}

#[test]
fn test_unexpected_token_without_lexeme() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenCategory::Int,
            expected_lexeme: None,
            found: TokenCategory::Operator,
            token: "*".to_string(),
        },
        Position(6),
    );

    assert_eq!(
        error.to_string(),
        "syntax error: expecting Int; saw Operator \"*\" at column 6"
    );
    assert_eq!(error.get_tip().to_string(), "Expected Int, found Operator `*`");
}

#[test]
fn test_unknown_variable_error() {
    let error = Error::new(
        ErrorImpl::UnknownVariable {
            name: "a".to_string(),
        },
        Position(4),
    );

    assert_eq!(error.get_error_name(), "UnknownVariable");
    assert!(!error.is_lexical());
}

#[test]
fn test_end_of_stream_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfStream {
            expected: TokenCategory::Int,
        },
        Position(4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfStream");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: String::new(),
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "3.".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`3.`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position(4));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(!error.is_lexical());
    assert_eq!(
        error.to_string(),
        "expression nested too deeply: limit is 256 at column 4"
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("256")),
        _ => panic!("Expected suggestion tip"),
    }
}
