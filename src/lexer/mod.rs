//! Lexical analysis module.
//!
//! This module contains the lexer that converts a `z = ...` line into a
//! stream of tokens for parsing. It handles:
//!
//! - Classification of single characters into token categories
//! - Integer and decimal literals, including malformed ones like `3.`
//! - Single letter identifiers
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
