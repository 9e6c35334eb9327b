//! Integration tests for end-to-end function parsing.
//!
//! These tests verify that the complete pipeline works correctly from a
//! `z = ...` line through tokenization, parsing and evaluation, using only
//! the public API.

use std::thread;

use polyfunc::{
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenCategory},
    parser::parser::parse,
    render_error,
    trace::xml::trace,
    Function,
};

#[test]
fn test_polynomial() {
    let function = Function::new("z = x^2 + 2y").unwrap();

    assert_eq!(function.evaluate(3.0, 1.0), 11.0);
}

#[test]
fn test_right_associative_exponent() {
    let function = Function::new("z = 2^3^2").unwrap();

    assert_eq!(function.evaluate(0.0, 0.0), 512.0);
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(Function::new("z = 3x").unwrap().evaluate(2.0, 0.0), 6.0);
    assert_eq!(Function::new("z = 2x y").unwrap().evaluate(2.0, 5.0), 20.0);
}

#[test]
fn test_division_by_zero_sign() {
    assert_eq!(
        Function::new("z = 1/0").unwrap().evaluate(0.0, 0.0),
        f64::INFINITY
    );
    assert_eq!(
        Function::new("z = -1/0").unwrap().evaluate(0.0, 0.0),
        f64::NEG_INFINITY
    );
}

#[test]
fn test_decimal_point_is_preserved() {
    let function = Function::new("z = 3.2").unwrap();

    assert_eq!(function.evaluate(0.0, 0.0), 3.2);
    assert_ne!(function.evaluate(0.0, 0.0), 32.0);
}

#[test]
fn test_malformed_literal() {
    let error = Function::new("z = 3.").unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(
        *error.kind(),
        ErrorImpl::MalformedNumber {
            token: "3.".to_string()
        }
    );
}

#[test]
fn test_unknown_character() {
    let source = "z = 3#2";
    let error = Function::new(source).unwrap_err();

    assert_eq!(
        *error.kind(),
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string()
        }
    );
    assert!(render_error(&error, source).contains("`#`"));
}

#[test]
fn test_independent_functions() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let source = if i % 2 == 0 { "z = x+1" } else { "z = y*2" };
                let function = Function::new(source).unwrap();
                (i, function.evaluate(3.0, 4.0))
            })
        })
        .collect();

    for handle in handles {
        let (i, value) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(value, 4.0);
        } else {
            assert_eq!(value, 8.0);
        }
    }
}

#[test]
fn test_complex_function() {
    let function = Function::new("z=3x^y^4-2y^3+3.2/(xy^7)").unwrap();

    // 3 * 2^(1^4) - 2 * 1^3 + 3.2 / (2 * 1^7)
    assert!((function.evaluate(2.0, 1.0) - 5.6).abs() < 1e-12);
}

#[test]
fn test_tokens_then_tree_then_trace() {
    let source = "z = (x + y) / 2";

    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens.last().unwrap().category, TokenCategory::EndOfInput);

    let root = parse(source).unwrap();
    assert_eq!(root.to_string(), "((x + y) / 2)");
    assert_eq!(root.evaluate(1.0, 3.0), 2.0);

    let rendered = trace(source).unwrap();
    assert!(rendered.starts_with("<Function>"));
    assert!(rendered.ends_with("</Function>"));
}

#[test]
fn test_error_message_names_categories() {
    let error = Function::new("z = (x").unwrap_err();

    assert_eq!(
        error.to_string(),
        "syntax error: expecting Parenthesis `)`; saw EndOfInput \"$\" at column 6"
    );
}

#[test]
fn test_deeply_nested_line_is_an_error() {
    let source = format!("z = {}x{}", "(".repeat(10_000), ")".repeat(10_000));
    let error = Function::new(&source).unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::NestingTooDeep { .. }));
    assert!(render_error(&error, &source).contains("NestingTooDeep"));
}

#[test]
fn test_long_sum_does_not_abort() {
    let source = format!("z = x{}", "+x".repeat(20_000));

    match Function::new(&source) {
        Ok(function) => assert_eq!(function.evaluate(1.0, 0.0), 20_001.0),
        Err(error) => assert!(matches!(error.kind(), ErrorImpl::NestingTooDeep { .. })),
    }
}
