/// AST (expression tree) module
/// Contains all definitions related to the tree a function is parsed into
///
/// Submodules:
/// - ast: The tree node and variable definitions
/// - operators: The binary operators and the arithmetic behind them
pub mod ast;
pub mod operators;
