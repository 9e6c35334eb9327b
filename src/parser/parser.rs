//! Parser implementation for building the expression tree.
//!
//! This module contains the Parser struct and the parsing entry points.
//! The parser keeps exactly one token of lookahead, pulled lazily from the
//! lexer and refreshed after every successful match. The grammar rules
//! themselves live in `expr.rs`.

use log::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenCategory},
    },
    Position,
};

/// Deepest chain of open grammar rules a line may produce. Every
/// parenthesis costs four rules, so this allows about sixty levels.
pub const MAX_NESTING: usize = 256;

/// Deepest tree a line may produce. Evaluation, display and drop all recurse
/// over the tree, so a long flat chain is limited the same way nesting is.
pub const MAX_TREE_DEPTH: usize = 512;

use super::{
    expr::parse_function,
    observer::{NoTrace, ParseObserver, Rule},
};

/// The parser state for a single source line.
pub struct Parser<O: ParseObserver = NoTrace> {
    /// Token source, only ever moves forward
    lexer: Lexer,
    /// The single token of lookahead, `None` once the end marker is consumed
    lookahead: Option<Token>,
    /// End of the last consumed token
    position: Position,
    /// Number of grammar rules currently open
    nesting: usize,
    observer: O,
}

impl Parser<NoTrace> {
    pub fn new(source: &str) -> Self {
        Parser::with_observer(source, NoTrace)
    }
}

impl<O: ParseObserver> Parser<O> {
    /// Creates a parser that reports its progress to `observer`.
    pub fn with_observer(source: &str, observer: O) -> Self {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token();

        Parser {
            lexer,
            lookahead,
            position: Position::null(),
            nesting: 0,
            observer,
        }
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    pub fn current_category(&self) -> Option<TokenCategory> {
        self.lookahead.as_ref().map(|token| token.category)
    }

    /// Checks the lookahead against a category and, when given, a lexeme.
    pub fn matches(&self, category: TokenCategory, lexeme: Option<&str>) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|token| token.matches(category, lexeme))
    }

    pub fn matches_any(&self, category: TokenCategory, lexemes: &[&str]) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|token| token.matches_any(category, lexemes))
    }

    /// Consumes the lookahead if it matches, otherwise fails without
    /// consuming anything.
    ///
    /// # Arguments
    ///
    /// * `category` - The expected TokenCategory
    /// * `lexeme` - The exact text expected, if any
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise the lexical or
    /// syntax error describing the mismatch.
    pub fn expect(&mut self, category: TokenCategory, lexeme: Option<&str>) -> Result<Token, Error> {
        let Some(token) = self.lookahead.take() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfStream { expected: category },
                self.position,
            ));
        };

        if !token.matches(category, lexeme) {
            let error = mismatch_error(&token, category, lexeme);
            self.lookahead = Some(token);
            return Err(error);
        }

        self.position = token.span.end;
        self.lookahead = self.lexer.next_token();
        self.observer.token(&token);

        Ok(token)
    }

    /// Opens a grammar rule, failing once the nesting limit is reached.
    pub fn enter(&mut self, rule: Rule) -> Result<(), Error> {
        if self.nesting >= MAX_NESTING {
            return Err(self.too_deep(MAX_NESTING));
        }

        trace!("entering {}", rule);
        self.nesting += 1;
        self.observer.enter(rule);
        Ok(())
    }

    pub fn exit(&mut self, rule: Rule) {
        self.nesting = self.nesting.saturating_sub(1);
        self.observer.exit(rule);
    }

    /// Fails when a tree of `depth` levels would be too deep to walk.
    pub fn check_depth(&self, depth: usize) -> Result<(), Error> {
        if depth > MAX_TREE_DEPTH {
            return Err(self.too_deep(MAX_TREE_DEPTH));
        }
        Ok(())
    }

    fn too_deep(&self, limit: usize) -> Error {
        Error::new(ErrorImpl::NestingTooDeep { limit }, self.get_position())
    }

    /// Returns the position of the lookahead, or the end of the last
    /// consumed token once the stream has ended.
    pub fn get_position(&self) -> Position {
        self.lookahead
            .as_ref()
            .map_or(self.position, |token| token.span.start)
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Builds the error for a lookahead that did not match.
///
/// Invalid tokens are reported as the lexical error they stand for, anything
/// else is a syntax error naming the expected and observed categories.
pub fn mismatch_error(token: &Token, category: TokenCategory, lexeme: Option<&str>) -> Error {
    let error_impl = match token.category {
        TokenCategory::Invalid if token.lexeme.len() > 1 && token.lexeme.ends_with('.') => {
            ErrorImpl::MalformedNumber {
                token: token.lexeme.clone(),
            }
        }
        TokenCategory::Invalid => ErrorImpl::UnrecognisedToken {
            token: token.lexeme.clone(),
        },
        found => ErrorImpl::UnexpectedToken {
            expected: category,
            expected_lexeme: lexeme.map(String::from),
            found,
            token: token.lexeme.clone(),
        },
    };

    Error::new(error_impl, token.span.start)
}

/// Parses a `z = <expression>` line into an expression tree.
///
/// This is the main entry point for parsing. The whole line must be consumed;
/// the first lexical or syntax error aborts the parse.
pub fn parse(source: &str) -> Result<Node, Error> {
    parse_with_observer(source, NoTrace).map(|(root, _)| root)
}

/// Parses like [`parse`] while reporting every rule and token to `observer`,
/// which is handed back alongside the tree.
pub fn parse_with_observer<O: ParseObserver>(source: &str, observer: O) -> Result<(Node, O), Error> {
    debug!("Parsing function: {}", source);

    let mut parser = Parser::with_observer(source, observer);
    let root = parse_function(&mut parser)?;

    debug!("Parsed tree: {}", root);
    Ok((root, parser.into_observer()))
}
