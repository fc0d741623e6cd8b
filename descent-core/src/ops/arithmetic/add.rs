use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_binary_op;

// --- Backward Operation Structure ---

/// Backward operation context for addition. Both local gradients are 1, so
/// no forward value needs to be kept.
#[derive(Debug)]
pub struct AddBackward {
    a: Node,
    b: Node,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a, self.b]
    }
}

// --- Forward Operation ---

/// Computes `a + b`.
pub fn add_op(a: &Node, b: &Node) -> Node {
    apply_binary_op(
        a,
        b,
        |x, y| x + y,
        |a, b, _, _| Operation::Add(AddBackward { a, b }),
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
