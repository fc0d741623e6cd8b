use crate::error::DescentError;
use crate::node::Node;

pub mod mse;

pub use mse::{MSELoss, Reduction};

/// A scalar loss over a batch of predictions.
///
/// Implementations must build the loss purely from [`Node`] operators so that
/// `loss.backward()` reaches every prediction without special handling.
pub trait LossFunction {
    /// Computes the loss node for `predictions` against raw `targets`.
    fn compute(&self, predictions: &[Node], targets: &[f64]) -> Result<Node, DescentError>;
}
