//! Utility macros for the function parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! This macro reduces boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$lexeme` - The token's text
/// * `$start` - Column of the first character
/// * `$end` - Column one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Int, "42".to_string(), 4, 6);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $lexeme:expr, $start:expr, $end:expr) => {
        Token {
            category: $category,
            lexeme: $lexeme,
            span: Span {
                start: Position($start),
                end: Position($end),
            },
        }
    };
}
