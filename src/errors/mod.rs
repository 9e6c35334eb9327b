//! Error types and error handling for function parsing.
//!
//! This module defines the errors raised while turning a `z = ...` line into
//! an expression tree. It includes:
//!
//! - Error structures with the source column they were raised at
//! - Lexical variants (unrecognised characters, malformed numbers)
//! - Syntax variants carrying the expected and observed token category
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
