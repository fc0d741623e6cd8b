mod common;

use approx::assert_relative_eq;
use common::noiseless_linear;
use descent_core::nn::init;
use descent_core::nn::losses::MSELoss;
use descent_core::optim::{GradientDescent, TrainingConfig, Vanilla};

#[test]
fn training_reduces_loss_and_recovers_weights() {
    let true_weights = [1.5, -2.0, 0.5];
    let (features, targets) = noiseless_linear(&true_weights, 20);
    let mut params = init::constant(true_weights.len(), 0.1);
    let config = TrainingConfig::default()
        .with_learning_rate(0.1)
        .with_epochs(2000)
        .with_log_every(0);

    let history = Vanilla::new()
        .fit(&mut params, &features, &targets, &MSELoss::default(), &config)
        .unwrap();

    let losses = history.losses();
    assert!(losses.windows(2).all(|w| w[1] <= w[0] + 1e-12));
    assert!(history.final_loss().unwrap() < 1e-8);
    for (param, &w) in params.iter().zip(&true_weights) {
        assert_relative_eq!(param.value(), w, epsilon = 1e-3);
        assert_eq!(param.grad(), 0.0);
    }
}
