//! Diagnostic trace of a parse.
//!
//! Walks the same grammar as the tree builder through a `ParseObserver` and
//! renders every nonterminal and matched token as nested tags. Useful only
//! for visualising how a line was parsed.

pub mod xml;
