#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod function;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod trace;

extern crate regex;

pub use crate::function::function::Function;

/// Character offset into the source line of a function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Renders `error` against the line it was raised for.
///
/// ```text
/// Error: UnrecognisedToken (Unrecognised character `#`)
///   |
/// 1 | z = 3#2
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    let line_str = "1";
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(source);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = error.get_position().0.saturating_sub(removed_whitespace) + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
