use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for `sin`.
#[derive(Debug)]
pub struct SinBackward {
    a: Node,
    a_value: f64,
}

impl BackwardOp for SinBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output * self.a_value.cos()]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

pub fn sin_op(a: &Node) -> Node {
    apply_unary_op(a, f64::sin, |a, a_value| {
        Operation::Sin(SinBackward { a, a_value })
    })
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
