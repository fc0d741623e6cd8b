//! Forward implementations of the differentiable operations.
//!
//! Each op computes its value eagerly and, when at least one operand requires
//! gradients, attaches the matching [`Operation`] record to the result. When
//! no operand requires gradients the result is a plain untracked node and no
//! graph is recorded.

use crate::autograd::Operation;
use crate::node::Node;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{cos_op, exp_op, ln_op, sin_op};

/// Applies a scalar function of one node.
///
/// `build_backward` receives a handle to the input and the input value seen
/// by the forward pass; it is only called when the input requires gradients.
pub(crate) fn apply_unary_op<F, B>(a: &Node, forward: F, build_backward: B) -> Node
where
    F: FnOnce(f64) -> f64,
    B: FnOnce(Node, f64) -> Operation,
{
    let a_value = a.value();
    let value = forward(a_value);
    let operation = if a.requires_grad() {
        Some(build_backward(a.clone(), a_value))
    } else {
        None
    };
    Node::from_operation(value, operation)
}

/// Applies a scalar function of two nodes.
///
/// The operation is recorded when either operand requires gradients.
pub(crate) fn apply_binary_op<F, B>(a: &Node, b: &Node, forward: F, build_backward: B) -> Node
where
    F: FnOnce(f64, f64) -> f64,
    B: FnOnce(Node, Node, f64, f64) -> Operation,
{
    let a_value = a.value();
    let b_value = b.value();
    let value = forward(a_value, b_value);
    let operation = if a.requires_grad() || b.requires_grad() {
        Some(build_backward(a.clone(), b.clone(), a_value, b_value))
    } else {
        None
    };
    Node::from_operation(value, operation)
}
