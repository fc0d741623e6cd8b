use crate::error::DescentError;

/// Hyperparameters for [`GradientDescent::fit`](super::GradientDescent::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Step size applied to every parameter gradient.
    pub learning_rate: f64,
    /// Number of full passes over the training data.
    pub epochs: usize,
    /// Log the loss every `log_every` epochs (0 disables progress logging).
    pub log_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            learning_rate: 0.01,
            epochs: 100,
            log_every: 10,
        }
    }
}

impl TrainingConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// # Errors
    /// Returns `DescentError::InvalidHyperparameter` if the learning rate is
    /// not a positive finite number.
    pub fn validate(&self) -> Result<(), DescentError> {
        validate_learning_rate(self.learning_rate)
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<(), DescentError> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(DescentError::InvalidHyperparameter {
            name: "learning_rate".to_string(),
            value: learning_rate,
        });
    }
    Ok(())
}
