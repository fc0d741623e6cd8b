// descent-core/src/ops/math_elem/ln.rs

use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_unary_op;

// --- LnBackward Definition ---

/// Backward pass structure for the natural logarithm (`ln`) operation.
///
/// Stores the input value seen by the forward pass, as it is needed to compute
/// the gradient (1 / input).
#[derive(Debug)]
pub struct LnBackward {
    a: Node,
    a_value: f64,
}

// --- BackwardOp Implementation for LnBackward ---

impl BackwardOp for LnBackward {
    /// Computes the gradient for \( z = \ln(a) \):
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output / self.a_value]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.a.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.a]
    }
}

// --- ln_op Implementation (Public API + Autograd Setup) ---

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers.
/// `ln(0)` is `-inf` and negative inputs give NaN; the gradient \( 1/x \)
/// is infinite at zero.
pub fn ln_op(a: &Node) -> Node {
    apply_unary_op(a, f64::ln, |a, a_value| {
        Operation::Ln(LnBackward { a, a_value })
    })
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
