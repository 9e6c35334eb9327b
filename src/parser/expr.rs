use crate::{
    ast::{
        ast::{Node, Variable},
        operators::Operator,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenCategory},
};

use super::{
    observer::{ParseObserver, Rule},
    parser::Parser,
};

// function := "z" "=" expression EndOfInput
pub fn parse_function<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Function)?;

    parser.expect(TokenCategory::Identifier, Some("z"))?;
    parser.expect(TokenCategory::Assignment, None)?;
    let root = parse_expression(parser)?;
    parser.expect(TokenCategory::EndOfInput, None)?;

    parser.exit(Rule::Function);
    Ok(root)
}

// expression := term (("+" | "-") term)*
pub fn parse_expression<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Expression)?;

    let mut node = parse_term(parser)?;
    let mut depth = node.depth();
    while at_additive_operator(parser) {
        let operator = parse_operator(parser)?;
        let right = parse_term(parser)?;
        depth = 1 + depth.max(right.depth());
        parser.check_depth(depth)?;
        node = Node::binary(operator, node, right);
    }

    parser.exit(Rule::Expression);
    Ok(node)
}

// term := factor (operator? factor)*
//
// Two factors with nothing between them are multiplied: `2xy`, `3x^2`, `2(x+1)`.
pub fn parse_term<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Term)?;

    let mut node = parse_factor(parser)?;
    let mut depth = node.depth();
    while !at_term_end(parser) {
        let operator = if parser.matches(TokenCategory::Operator, None) {
            parse_operator(parser)?
        } else {
            Operator::Multiply
        };

        let right = parse_factor(parser)?;
        depth = 1 + depth.max(right.depth());
        parser.check_depth(depth)?;
        node = Node::binary(operator, node, right);
    }

    parser.exit(Rule::Term);
    Ok(node)
}

fn at_term_end<O: ParseObserver>(parser: &Parser<O>) -> bool {
    parser.current_token().is_none()
        || at_additive_operator(parser)
        || parser.matches(TokenCategory::Parenthesis, Some(")"))
        || parser.matches(TokenCategory::EndOfInput, None)
}

fn at_additive_operator<O: ParseObserver>(parser: &Parser<O>) -> bool {
    parser.current_token().is_some_and(|token| {
        token.category == TokenCategory::Operator
            && Operator::try_from(token.lexeme.as_str())
                .is_ok_and(|operator| operator.is_additive())
    })
}

// factor := power ("^" factor)?
pub fn parse_factor<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Factor)?;

    let mut node = parse_power(parser)?;
    if parser.matches(TokenCategory::Operator, Some("^")) {
        parser.expect(TokenCategory::Operator, Some("^"))?;
        // Recursing into factor, not term, makes `^` group to the right
        let exponent = parse_factor(parser)?;
        parser.check_depth(1 + node.depth().max(exponent.depth()))?;
        node = Node::binary(Operator::Power, node, exponent);
    }

    parser.exit(Rule::Factor);
    Ok(node)
}

// power := "(" expression ")" | "-" factor | value
pub fn parse_power<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Power)?;

    let node = if parser.matches(TokenCategory::Parenthesis, Some("(")) {
        parser.expect(TokenCategory::Parenthesis, Some("("))?;
        let inner = parse_expression(parser)?;
        parser.expect(TokenCategory::Parenthesis, Some(")"))?;
        inner
    } else if parser.matches(TokenCategory::Operator, Some("-")) {
        parser.expect(TokenCategory::Operator, Some("-"))?;
        let operand = parse_factor(parser)?;
        parser.check_depth(1 + operand.depth())?;
        Node::negate(operand)
    } else {
        parse_value(parser)?
    };

    parser.exit(Rule::Power);
    Ok(node)
}

// value := "x" | "y" | Float | Int
pub fn parse_value<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Node, Error> {
    parser.enter(Rule::Value)?;

    let node = if parser.matches(TokenCategory::Identifier, None) {
        let token = parser.expect(TokenCategory::Identifier, None)?;
        match Variable::try_from(token.lexeme.as_str()) {
            Ok(variable) => Node::Variable(variable),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::UnknownVariable { name: token.lexeme },
                    token.span.start,
                ))
            }
        }
    } else if parser.matches(TokenCategory::Float, None) {
        let token = parser.expect(TokenCategory::Float, None)?;
        Node::Number(parse_number(&token)?)
    } else {
        let token = parser.expect(TokenCategory::Int, None)?;
        Node::Number(parse_number(&token)?)
    };

    parser.exit(Rule::Value);
    Ok(node)
}

fn parse_operator<O: ParseObserver>(parser: &mut Parser<O>) -> Result<Operator, Error> {
    let token = parser.expect(TokenCategory::Operator, None)?;

    Operator::try_from(token.lexeme.as_str()).map_err(|_| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenCategory::Operator,
                expected_lexeme: None,
                found: token.category,
                token: token.lexeme.clone(),
            },
            token.span.start,
        )
    })
}

fn parse_number(token: &Token) -> Result<f64, Error> {
    token.lexeme.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::MalformedNumber {
                token: token.lexeme.clone(),
            },
            token.span.start,
        )
    })
}
