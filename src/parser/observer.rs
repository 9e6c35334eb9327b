use std::fmt::Display;

use crate::lexer::tokens::Token;

/// The nonterminals of the function grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Function,
    Expression,
    Term,
    Factor,
    Power,
    Value,
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Hook the parser drives while walking the grammar.
///
/// Every rule is reported on entry and on successful exit, and every token
/// is reported right after it has been matched. A failed parse stops
/// reporting at the point of failure.
pub trait ParseObserver {
    fn enter(&mut self, _rule: Rule) {}
    fn exit(&mut self, _rule: Rule) {}
    fn token(&mut self, _token: &Token) {}
}

/// Observer used when only the tree is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl ParseObserver for NoTrace {}
