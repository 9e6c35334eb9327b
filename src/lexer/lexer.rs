use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{classify, Token, TokenCategory, END_MARKER};

lazy_static! {
    static ref DIGITS: Regex = Regex::new("^[0-9]+").unwrap();
    static ref SPACES: Regex = Regex::new("^ +").unwrap();
}

/// Pulls tokens out of a single source line, one per call.
///
/// The cursor only moves forward. Once the end marker has been handed out,
/// every further call returns `None`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of the cursor
    pos: usize,
    /// Character offset of the cursor, used for spans
    column: usize,
    /// Byte offset of the appended end marker
    sentinel: usize,
    ended: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut text = String::with_capacity(source.len() + 1);
        text.push_str(source);
        text.push(END_MARKER);

        Lexer {
            source: text,
            pos: 0,
            column: 0,
            sentinel: source.len(),
            ended: false,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whether the end marker has already been emitted.
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn get_position(&self) -> Position {
        Position(self.column)
    }

    // Only valid for runs of ASCII characters.
    fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.column += n;
    }

    fn advance_char(&mut self, c: char) {
        self.pos += c.len_utf8();
        self.column += 1;
    }

    fn skip_spaces(&mut self) {
        if let Some(spaces) = SPACES.find(self.remainder()) {
            let len = spaces.end();
            self.advance_n(len);
        }
    }

    fn take_digits(&mut self) -> String {
        let len = DIGITS.find(self.remainder()).map_or(0, |digits| digits.end());
        let digits = self.remainder()[..len].to_string();
        self.advance_n(len);
        digits
    }

    pub fn next_token(&mut self) -> Option<Token> {
        if self.ended {
            return None;
        }

        let token = self.scan();
        trace!("lexed {}", token);
        Some(token)
    }

    fn scan(&mut self) -> Token {
        self.skip_spaces();

        let start = self.column;
        let Some(current) = self.at() else {
            return MK_TOKEN!(TokenCategory::Invalid, String::new(), start, start);
        };

        if let Some(category) = classify(current) {
            let at_sentinel = self.pos == self.sentinel;
            self.advance_char(current);

            if category == TokenCategory::EndOfInput {
                if !at_sentinel {
                    // A `$` typed by the user is not the end of the line
                    return MK_TOKEN!(TokenCategory::Invalid, current.to_string(), start, self.column);
                }
                self.ended = true;
            }

            return MK_TOKEN!(category, current.to_string(), start, self.column);
        }

        if current.is_ascii_digit() {
            return self.number(start);
        }

        // Identifiers are always exactly one letter
        self.advance_char(current);
        let category = if current.is_ascii_alphabetic() {
            TokenCategory::Identifier
        } else {
            TokenCategory::Invalid
        };
        MK_TOKEN!(category, current.to_string(), start, self.column)
    }

    fn number(&mut self, start: usize) -> Token {
        let left_digits = self.take_digits();

        if self.at() != Some('.') {
            return MK_TOKEN!(TokenCategory::Int, left_digits, start, self.column);
        }

        self.advance_n(1);
        if self.at().is_some_and(|c| c.is_ascii_digit()) {
            let right_digits = self.take_digits();
            MK_TOKEN!(
                TokenCategory::Float,
                format!("{}.{}", left_digits, right_digits),
                start,
                self.column
            )
        } else {
            MK_TOKEN!(
                TokenCategory::Invalid,
                format!("{}.", left_digits),
                start,
                self.column
            )
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Drains a lexer over `source`, end marker included.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
