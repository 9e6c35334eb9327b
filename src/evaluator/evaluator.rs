use crate::ast::ast::{Node, Variable};

/// Evaluates `node` with `x` and `y` bound to the given values.
///
/// Pure function of the tree and the two inputs. Recursion depth is the depth
/// of the tree.
pub fn evaluate(node: &Node, x: f64, y: f64) -> f64 {
    match node {
        Node::Number(value) => *value,
        Node::Variable(Variable::X) => x,
        Node::Variable(Variable::Y) => y,
        Node::Binary {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, x, y);
            let right = evaluate(right, x, y);
            operator.apply(left, right)
        }
    }
}

impl Node {
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        evaluate(self, x, y)
    }
}
