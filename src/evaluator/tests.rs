use crate::{
    ast::{
        ast::{Node, Variable},
        operators::Operator,
    },
    parser::parser::parse,
};

use super::evaluator::evaluate;

fn eval(source: &str, x: f64, y: f64) -> f64 {
    evaluate(&parse(source).unwrap(), x, y)
}

#[test]
fn test_evaluate_leaves() {
    assert_eq!(evaluate(&Node::Number(2.5), 0.0, 0.0), 2.5);
    assert_eq!(evaluate(&Node::Variable(Variable::X), 4.0, 7.0), 4.0);
    assert_eq!(evaluate(&Node::Variable(Variable::Y), 4.0, 7.0), 7.0);
}

#[test]
fn test_evaluate_built_tree() {
    let node = Node::binary(
        Operator::Subtract,
        Node::Variable(Variable::X),
        Node::Variable(Variable::Y),
    );

    assert_eq!(node.evaluate(10.0, 4.0), 6.0);
    assert_eq!(node.evaluate(4.0, 10.0), -6.0);
}

#[test]
fn test_evaluate_polynomial() {
    assert_eq!(eval("z = x^2 + 2y", 3.0, 1.0), 11.0);
}

#[test]
fn test_evaluate_right_associative_power() {
    assert_eq!(eval("z = 2^3^2", 0.0, 0.0), 512.0);
    assert_eq!(eval("z = (2^3)^2", 0.0, 0.0), 64.0);
}

#[test]
fn test_evaluate_implicit_multiplication() {
    assert_eq!(eval("z = 3x", 2.0, 0.0), 6.0);
    assert_eq!(eval("z = 2x y", 2.0, 5.0), 20.0);
    assert_eq!(eval("z = 2xy", 2.0, 5.0), 20.0);
}

#[test]
fn test_evaluate_division_by_zero() {
    assert_eq!(eval("z = 1/0", 0.0, 0.0), f64::INFINITY);
    assert_eq!(eval("z = -1/0", 0.0, 0.0), f64::NEG_INFINITY);
    assert_eq!(eval("z = 0/0", 0.0, 0.0), f64::INFINITY);
    assert_eq!(eval("z = x/y", -3.0, 0.0), f64::NEG_INFINITY);
}

#[test]
fn test_evaluate_decimal_literal() {
    assert_eq!(eval("z = 3.2", 0.0, 0.0), 3.2);
    assert_eq!(eval("z = 0.5x", 4.0, 0.0), 2.0);
}

#[test]
fn test_evaluate_is_repeatable() {
    let root = parse("z = x^2 - y").unwrap();

    assert_eq!(evaluate(&root, 1.0, 1.0), 0.0);
    assert_eq!(evaluate(&root, 2.0, 1.0), 3.0);
    assert_eq!(evaluate(&root, 1.0, 1.0), 0.0);
}

#[test]
fn test_evaluate_fractional_power() {
    assert!((eval("z = x^0.5", 9.0, 0.0) - 3.0).abs() < 1e-12);
    assert!(eval("z = x^0.5", -1.0, 0.0).is_nan());
}
