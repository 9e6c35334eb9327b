use std::{fmt::Display, str::FromStr};

use log::debug;

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    parser::{
        observer::{NoTrace, ParseObserver},
        parser::parse_with_observer,
    },
};

/// A parsed `z = f(x, y)` definition.
///
/// Owns its tree exclusively. Parsing happens once in [`Function::new`];
/// evaluation only reads the tree, so a `Function` can be shared across
/// threads and evaluated from all of them at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    source: String,
    root: Node,
}

impl Function {
    pub fn new(source: &str) -> Result<Function, Error> {
        let (function, _) = Function::with_observer(source, NoTrace)?;
        Ok(function)
    }

    /// Parses `source` once, reporting the walk to `observer`, and hands the
    /// observer back alongside the function.
    pub fn with_observer<O: ParseObserver>(
        source: &str,
        observer: O,
    ) -> Result<(Function, O), Error> {
        let (root, observer) = parse_with_observer(source, observer)?;
        debug!("Built function `{}` with tree depth {}", source, root.depth());

        let function = Function {
            source: source.to_string(),
            root,
        };
        Ok((function, observer))
    }

    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        evaluate(&self.root, x, y)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Function::new(source)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
