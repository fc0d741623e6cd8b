use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for `exp`.
#[derive(Debug)]
pub struct ExpBackward {
    a: Node,
    a_value: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output * self.a_value.exp()]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

/// Computes \( e^a \).
pub fn exp_op(a: &Node) -> Node {
    apply_unary_op(a, f64::exp, |a, a_value| {
        Operation::Exp(ExpBackward { a, a_value })
    })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
