use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward operation context for negation.
#[derive(Debug)]
pub struct NegBackward {
    a: Node,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![-grad_output]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

/// Computes `-a`.
pub fn neg_op(a: &Node) -> Node {
    apply_unary_op(a, |x| -x, |a, _| Operation::Neg(NegBackward { a }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
