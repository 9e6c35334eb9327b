use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenCategory, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lexical errors come from characters the lexer could not turn into a
    /// meaningful token, everything else is a syntax error.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::MalformedNumber { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::UnexpectedEndOfStream { .. } => "UnexpectedEndOfStream",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } if token.is_empty() => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("Unrecognised character `{}`", token))
            }
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point must be followed by a digit",
                token
            )),
            ErrorImpl::UnexpectedToken {
                expected,
                expected_lexeme,
                found,
                token,
            } => ErrorTip::Suggestion(format!(
                "Expected {}, found {} `{}`",
                describe_expected(expected, expected_lexeme),
                found,
                token
            )),
            ErrorImpl::UnknownVariable { name } => ErrorTip::Suggestion(format!(
                "Unknown variable `{}`, only `x` and `y` can be used",
                name
            )),
            ErrorImpl::UnexpectedEndOfStream { expected } => {
                ErrorTip::Suggestion(format!("Expected {} after the end of input", expected))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression is nested more than {} levels deep, split it up",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at column {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("syntax error: expecting {}; saw {found} {token:?}", describe_expected(.expected, .expected_lexeme))]
    UnexpectedToken {
        expected: TokenCategory,
        expected_lexeme: Option<String>,
        found: TokenCategory,
        token: String,
    },
    #[error("unknown variable {name:?}")]
    UnknownVariable { name: String },
    #[error("syntax error: expecting {expected}; saw end of stream")]
    UnexpectedEndOfStream { expected: TokenCategory },
    #[error("expression nested too deeply: limit is {limit}")]
    NestingTooDeep { limit: usize },
}

fn describe_expected(category: &TokenCategory, lexeme: &Option<String>) -> String {
    match lexeme {
        Some(lexeme) => format!("{} `{}`", category, lexeme),
        None => category.to_string(),
    }
}
