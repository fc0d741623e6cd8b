use crate::node::Node;
use std::fmt::Debug;

/// Defines the backward pass of one differentiable scalar operation.
///
/// Every operation that creates a non-leaf [`Node`] has a record implementing
/// this trait, wrapped in the matching [`Operation`](super::Operation) variant
/// and stored in the output node. The record captures, at construction time,
/// the input handles and the forward scalars its local derivative needs.
/// Those snapshots are what `backward` reads; the live input values are never
/// consulted again, so `Node::set_value` on an input cannot corrupt a
/// derivative that was already recorded.
pub trait BackwardOp: Debug {
    /// Computes the gradients of the operation's inputs with respect to the
    /// loss, given the gradient of the operation's output (`grad_output`).
    ///
    /// For `out = f(in_1, ..., in_n)` this returns
    /// `grad_output * d out / d in_i` for each input, in the order of
    /// [`BackwardOp::inputs`].
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns the input nodes that participated in the forward operation,
    /// in the order matching [`BackwardOp::backward`].
    fn inputs(&self) -> Vec<Node>;

    /// Consumes the record and hands back its input handles.
    fn into_inputs(self) -> Vec<Node>
    where
        Self: Sized;
}
