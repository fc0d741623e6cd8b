use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_binary_op;

/// Backward operation context for division `a / b`.
#[derive(Debug)]
pub struct DivBackward {
    a: Node,
    b: Node,
    a_value: f64,
    b_value: f64,
}

impl BackwardOp for DivBackward {
    /// `d(a/b)/da = 1/b`, `d(a/b)/db = -a/b²`.
    ///
    /// A zero divisor yields infinities (or NaN for `0/0`), which propagate.
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let grad_a = grad_output / self.b_value;
        let grad_b = grad_output * (-self.a_value / (self.b_value * self.b_value));
        vec![grad_a, grad_b]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a, self.b]
    }
}

/// Computes `a / b`.
///
/// Division by a zero-valued node follows IEEE semantics: `±inf`, or NaN for
/// `0 / 0`. No error is raised.
pub fn div_op(a: &Node, b: &Node) -> Node {
    apply_binary_op(
        a,
        b,
        |x, y| x / y,
        |a, b, a_value, b_value| {
            Operation::Div(DivBackward {
                a,
                b,
                a_value,
                b_value,
            })
        },
    )
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
