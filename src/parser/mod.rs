//! Parser module for building the expression tree.
//!
//! This module contains the recursive descent parser that turns the token
//! stream of a `z = ...` line into an expression tree. It handles:
//!
//! - One function per grammar rule (expression, term, factor, power, value)
//! - Implicit multiplication between adjacent factors
//! - Right associative exponentiation
//! - Fail-fast error reporting with expected and observed token categories
//!
//! The parser reports its walk through the grammar to a `ParseObserver`,
//! which is how the diagnostic trace is produced without a second grammar.

pub mod expr;
pub mod observer;
pub mod parser;
