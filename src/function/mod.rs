//! Parsed functions of `x` and `y`, ready to be evaluated.

pub mod function;
