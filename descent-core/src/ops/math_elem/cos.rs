use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for `cos`.
#[derive(Debug)]
pub struct CosBackward {
    a: Node,
    a_value: f64,
}

impl BackwardOp for CosBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![-grad_output * self.a_value.sin()]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

pub fn cos_op(a: &Node) -> Node {
    apply_unary_op(a, f64::cos, |a, a_value| {
        Operation::Cos(CosBackward { a, a_value })
    })
}

#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;
