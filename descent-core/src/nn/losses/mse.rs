// descent-core/src/nn/losses/mse.rs

use crate::error::DescentError;
use crate::nn::losses::LossFunction;
use crate::node::Node;
use std::str::FromStr;

/// Specifies the reduction to apply to the output:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = DescentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(DescentError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// With `Reduction::Mean` the loss is \( \frac{1}{N} \sum_i (p_i - t_i)^2 \);
/// with `Reduction::Sum` the \( 1/N \) factor is dropped.
///
/// The loss is an ordinary expression over nodes: each squared error is
/// `diff * diff`, the terms are summed with `+`, and the mean divides by a
/// constant node. Targets become constant leaves that never require gradients.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates a new `MSELoss`.
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl LossFunction for MSELoss {
    /// # Errors
    /// * `LengthMismatch` if `predictions` and `targets` differ in length.
    /// * `EmptyInput` if there are no predictions.
    fn compute(&self, predictions: &[Node], targets: &[f64]) -> Result<Node, DescentError> {
        if predictions.len() != targets.len() {
            return Err(DescentError::LengthMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss compute".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(DescentError::EmptyInput("MSELoss compute".to_string()));
        }

        let mut total = Node::new(0.0);
        for (prediction, &target) in predictions.iter().zip(targets) {
            let diff = prediction - target;
            total = &total + &(&diff * &diff);
        }

        let loss = match self.reduction {
            Reduction::Mean => &total / predictions.len() as f64,
            Reduction::Sum => total,
        };
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
