use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

/// Backward pass structure for the hyperbolic tangent.
#[derive(Debug)]
pub struct TanhBackward {
    a: Node,
    a_value: f64,
}

impl BackwardOp for TanhBackward {
    /// \( \frac{d}{da} \tanh(a) = 1 - \tanh^2(a) \)
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let t = self.a_value.tanh();
        vec![grad_output * (1.0 - t * t)]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

/// Applies the hyperbolic tangent activation.
pub fn tanh_op(a: &Node) -> Node {
    apply_unary_op(a, f64::tanh, |a, a_value| {
        Operation::Tanh(TanhBackward { a, a_value })
    })
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
