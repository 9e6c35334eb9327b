use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Appended to every source line before scanning.
pub const END_MARKER: char = '$';

/// Single character categories, in the order the lexer tries them.
pub const SINGLE_CHAR_CATEGORIES: [TokenCategory; 4] = [
    TokenCategory::Assignment,
    TokenCategory::Operator,
    TokenCategory::Parenthesis,
    TokenCategory::EndOfInput,
];

lazy_static! {
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenCategory> = {
        let mut map = HashMap::new();
        for category in SINGLE_CHAR_CATEGORIES {
            for member in category.members() {
                map.entry(*member).or_insert(category);
            }
        }
        map
    };
}

/// Maps a character to its single character category, if it has one.
pub fn classify(c: char) -> Option<TokenCategory> {
    SINGLE_CHAR_LOOKUP.get(&c).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Int,
    Float,
    Identifier,
    Assignment,  // =
    Operator,    // + - * / ^
    Parenthesis, // ( )
    EndOfInput,
    Invalid,
}

impl TokenCategory {
    /// The fixed membership set of the category. Empty for categories that
    /// carry arbitrary captured text.
    pub fn members(&self) -> &'static [char] {
        match self {
            TokenCategory::Identifier => &['x', 'y', 'z'],
            TokenCategory::Assignment => &['='],
            TokenCategory::Operator => &['+', '-', '*', '/', '^'],
            TokenCategory::Parenthesis => &['(', ')'],
            TokenCategory::EndOfInput => &[END_MARKER],
            TokenCategory::Int | TokenCategory::Float | TokenCategory::Invalid => &[],
        }
    }

    /// Whether `lexeme` would make a valid token of this category.
    pub fn is_valid(&self, lexeme: &str) -> bool {
        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.members().contains(&c),
            _ => false,
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
    pub span: Span,
}

/// Renders as `<Category>lexeme</Category>`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>{}</{}>", self.category, self.lexeme, self.category)
    }
}

impl Token {
    /// Checks the category and, when given, the exact lexeme.
    pub fn matches(&self, category: TokenCategory, lexeme: Option<&str>) -> bool {
        self.category == category && lexeme.map_or(true, |lexeme| self.lexeme == lexeme)
    }

    pub fn matches_any(&self, category: TokenCategory, lexemes: &[&str]) -> bool {
        lexemes
            .iter()
            .any(|lexeme| self.matches(category, Some(lexeme)))
    }
}
