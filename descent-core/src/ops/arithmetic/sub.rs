use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_binary_op;

/// Backward operation context for subtraction `a - b`.
#[derive(Debug)]
pub struct SubBackward {
    a: Node,
    b: Node,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, -grad_output]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a, self.b]
    }
}

/// Computes `a - b`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    apply_binary_op(
        a,
        b,
        |x, y| x - y,
        |a, b, _, _| Operation::Sub(SubBackward { a, b }),
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
