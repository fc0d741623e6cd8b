use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_binary_op;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
///
/// Keeps the operand values seen by the forward pass: d(ab)/da = b and
/// d(ab)/db = a.
#[derive(Debug)]
pub struct MulBackward {
    a: Node,
    b: Node,
    a_value: f64,
    b_value: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output * self.b_value, grad_output * self.a_value]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a, self.b]
    }
}

// --- Forward Operation ---

/// Computes `a * b`.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |a, b, a_value, b_value| {
            Operation::Mul(MulBackward {
                a,
                b,
                a_value,
                b_value,
            })
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
