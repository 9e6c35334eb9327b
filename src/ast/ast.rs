use std::fmt::Display;

use super::operators::Operator;

/// The two variables a function can be evaluated at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
}

impl TryFrom<&str> for Variable {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "x" => Ok(Variable::X),
            "y" => Ok(Variable::Y),
            _ => Err(format!("Unknown variable: {}", value)),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::X => write!(f, "x"),
            Variable::Y => write!(f, "y"),
        }
    }
}

/// Expression tree node.
///
/// Leaves are numeric literals or variables, every internal node is a binary
/// operation. Trees are built bottom-up by the parser and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable(Variable),
    Binary {
        operator: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn binary(operator: Operator, left: Node, right: Node) -> Node {
        Node::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Negation has no node of its own, `-a` is stored as `0 - a`.
    pub fn negate(operand: Node) -> Node {
        Node::binary(Operator::Subtract, Node::Number(0.0), operand)
    }

    /// Number of nodes on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Number(_) | Node::Variable(_) => 1,
            Node::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Fully parenthesised infix form, e.g. `(2 ^ (3 ^ 2))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Variable(variable) => write!(f, "{}", variable),
            Node::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}
