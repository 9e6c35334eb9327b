//! Evaluation of expression trees at a point `(x, y)`.

pub mod evaluator;

#[cfg(test)]
mod tests;
