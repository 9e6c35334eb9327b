use crate::{
    errors::errors::Error,
    lexer::tokens::{Token, TokenCategory},
    parser::{
        observer::{ParseObserver, Rule},
        parser::parse_with_observer,
    },
};

/// Renders the walk through the grammar as nested tags, one per line,
/// indented with a tab per level.
///
/// ```text
/// <Function>
///     <Identifier>z</Identifier>
///     <Assignment>=</Assignment>
///     <Expression>
///         ...
///     </Expression>
/// </Function>
/// ```
#[derive(Debug, Default, Clone)]
pub struct XmlTrace {
    lines: Vec<String>,
    depth: usize,
}

impl XmlTrace {
    pub fn new() -> Self {
        XmlTrace::default()
    }

    fn push(&mut self, line: String) {
        self.lines.push(format!("{}{}", "\t".repeat(self.depth), line));
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl ParseObserver for XmlTrace {
    fn enter(&mut self, rule: Rule) {
        self.push(format!("<{}>", rule));
        self.depth += 1;
    }

    fn exit(&mut self, rule: Rule) {
        self.depth = self.depth.saturating_sub(1);
        self.push(format!("</{}>", rule));
    }

    fn token(&mut self, token: &Token) {
        if token.category != TokenCategory::EndOfInput {
            self.push(token.to_string());
        }
    }
}

/// Parses `source` and returns the rendered trace instead of the tree.
pub fn trace(source: &str) -> Result<String, Error> {
    let (_, trace) = parse_with_observer(source, XmlTrace::new())?;
    Ok(trace.finish())
}
