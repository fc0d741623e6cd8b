use crate::error::DescentError;
use crate::math::Matrix;
use crate::nn::losses::LossFunction;
use crate::node::Node;
use crate::optim::config::validate_learning_rate;
use crate::optim::gradient_descent::{linear_predictions, GradientDescent};

/// Plain batch gradient descent on a linear model.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug, Default)]
pub struct Vanilla {
    predictions: Vec<Node>,
}

impl Vanilla {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predictions built by the last call to `train`, with their values at
    /// that time.
    pub fn predictions(&self) -> &[Node] {
        &self.predictions
    }
}

impl GradientDescent for Vanilla {
    fn train(
        &mut self,
        params: &mut [Node],
        features: &Matrix,
        targets: &[f64],
        loss_fn: &dyn LossFunction,
        learning_rate: f64,
    ) -> Result<f64, DescentError> {
        validate_learning_rate(learning_rate)?;

        self.predictions = linear_predictions(params, features)?;
        let loss = loss_fn.compute(&self.predictions, targets)?;
        loss.backward();

        for param in params.iter() {
            let grad = param.grad();
            param.set_value(param.value() - learning_rate * grad);
            param.zero_grad();
        }
        log::debug!(
            "Vanilla step: loss={:.6}, lr={}, {} params",
            loss.value(),
            learning_rate,
            params.len()
        );
        Ok(loss.value())
    }
}

#[cfg(test)]
#[path = "vanilla_test.rs"]
mod tests;
