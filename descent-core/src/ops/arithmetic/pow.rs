use crate::autograd::{BackwardOp, Operation};
use crate::node::Node;
use crate::ops::apply_binary_op;

// --- Backward Operation Structure ---

/// Backward operation context for `base ^ exponent`.
#[derive(Debug)]
pub struct PowBackward {
    base: Node,
    exponent: Node,
    base_value: f64,
    exponent_value: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for PowBackward {
    /// Computes the gradients for \( z = a^b \):
    ///
    /// * \( \frac{dz}{da} = b \cdot a^{b-1} \)
    /// * \( \frac{dz}{db} = \ln(a) \cdot a^b \)
    ///
    /// The exponent gradient is only defined for \( a > 0 \). For other bases
    /// it comes out as NaN (or `-inf` at zero) even when the exponent does not
    /// require gradients; the engine then simply does not accumulate it.
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let a = self.base_value;
        let b = self.exponent_value;
        let grad_base = grad_output * b * a.powf(b - 1.0);
        let grad_exponent = grad_output * a.ln() * a.powf(b);
        vec![grad_base, grad_exponent]
    }

    fn inputs(&self) -> Vec<Node> {
        vec![self.base.clone(), self.exponent.clone()]
    }

    fn into_inputs(self) -> Vec<Node> {
        vec![self.base, self.exponent]
    }
}

// --- Forward Operation ---

/// Raises `base` to the power `exponent`.
///
/// Both operands are differentiable. A constant on either side is simply a
/// node that does not require gradients (see [`Node::powf`] and
/// [`Node::scalar_pow`]).
///
/// # Domain Considerations
/// A negative base with a non-integer exponent gives NaN, as does the
/// exponent gradient for any non-positive base.
pub fn pow_op(base: &Node, exponent: &Node) -> Node {
    apply_binary_op(
        base,
        exponent,
        f64::powf,
        |base, exponent, base_value, exponent_value| {
            Operation::Pow(PowBackward {
                base,
                exponent,
                base_value,
                exponent_value,
            })
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
