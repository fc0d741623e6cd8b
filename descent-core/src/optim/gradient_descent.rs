use crate::error::DescentError;
use crate::math::Matrix;
use crate::nn::losses::LossFunction;
use crate::node::Node;
use crate::optim::config::TrainingConfig;

/// Per-epoch losses recorded by [`GradientDescent::fit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }
}

/// Trait defining the common interface for gradient-descent trainers.
///
/// A trainer updates parameter nodes in place from the gradients a loss
/// produces over a batch of samples.
pub trait GradientDescent {
    /// Performs a single optimization step over `features` / `targets`.
    ///
    /// Builds the predictions, computes the loss with `loss_fn`, backpropagates
    /// it and updates every parameter. Parameters leave this call with a zero
    /// gradient.
    ///
    /// # Returns
    /// The loss value evaluated before the update.
    fn train(
        &mut self,
        params: &mut [Node],
        features: &Matrix,
        targets: &[f64],
        loss_fn: &dyn LossFunction,
        learning_rate: f64,
    ) -> Result<f64, DescentError>;

    /// Runs `config.epochs` calls to [`GradientDescent::train`] over the full
    /// data and records the loss of each.
    fn fit(
        &mut self,
        params: &mut [Node],
        features: &Matrix,
        targets: &[f64],
        loss_fn: &dyn LossFunction,
        config: &TrainingConfig,
    ) -> Result<TrainingHistory, DescentError> {
        config.validate()?;
        let mut history = TrainingHistory::default();
        for epoch in 0..config.epochs {
            let loss = self.train(params, features, targets, loss_fn, config.learning_rate)?;
            if !loss.is_finite() {
                log::warn!("Epoch {}: loss is not finite ({})", epoch + 1, loss);
            }
            if config.log_every > 0 && (epoch + 1) % config.log_every == 0 {
                log::info!("Epoch {:>4} | Loss: {:.6}", epoch + 1, loss);
            }
            history.losses.push(loss);
        }
        Ok(history)
    }
}

/// Builds one linear prediction per row of `features`:
/// `pred_i = 0 + sum_j params[j] * x_ij`.
///
/// Features are wrapped in constant nodes, so only the parameters receive
/// gradients.
///
/// # Errors
/// Returns `DescentError::DimensionMismatch` if the number of columns differs
/// from the number of parameters.
pub fn linear_predictions(params: &[Node], features: &Matrix) -> Result<Vec<Node>, DescentError> {
    if features.cols() != params.len() {
        return Err(DescentError::DimensionMismatch {
            expected: (features.rows(), params.len()),
            actual: features.shape(),
            operation: "linear_predictions".to_string(),
        });
    }
    Ok(features
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(params)
                .fold(Node::new(0.0), |pred, (&x, w)| &pred + &(w * x))
        })
        .collect())
}
