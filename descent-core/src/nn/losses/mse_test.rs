use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{create_constants, create_parameters};
use approx::assert_relative_eq;

#[test]
fn test_mse_mean_scenario() {
    let predictions = create_parameters(&[3.0, 5.0]);
    let targets = [2.0, 5.0];
    let loss = MSELoss::default().compute(&predictions, &targets).unwrap();
    assert_relative_eq!(loss.value(), 0.5);

    loss.backward();
    assert_relative_eq!(predictions[0].grad(), 1.0);
    assert_relative_eq!(predictions[1].grad(), 0.0);
}

#[test]
fn test_mse_sum_reduction() {
    let predictions = create_parameters(&[3.0, 5.0, 0.0]);
    let targets = [2.0, 5.0, 2.0];
    let loss = MSELoss::new(Reduction::Sum)
        .compute(&predictions, &targets)
        .unwrap();
    assert_relative_eq!(loss.value(), 5.0);

    loss.backward();
    assert_relative_eq!(predictions[0].grad(), 2.0);
    assert_relative_eq!(predictions[1].grad(), 0.0);
    assert_relative_eq!(predictions[2].grad(), -4.0);
}

#[test]
fn test_mse_untracked_predictions() {
    let predictions = create_constants(&[3.0, 5.0]);
    let loss = MSELoss::default()
        .compute(&predictions, &[2.0, 5.0])
        .unwrap();
    assert_relative_eq!(loss.value(), 0.5);
    assert!(!loss.requires_grad());
    loss.backward();
    assert_eq!(predictions[0].grad(), 0.0);
}

#[test]
fn test_mse_length_mismatch() {
    let predictions = create_parameters(&[1.0, 2.0]);
    match MSELoss::default().compute(&predictions, &[1.0]) {
        Err(DescentError::LengthMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_mse_empty() {
    assert!(matches!(
        MSELoss::default().compute(&[], &[]),
        Err(DescentError::EmptyInput(_))
    ));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!("none".parse::<Reduction>().is_err());
}

#[test]
fn test_mse_grad_check() {
    let predictions = create_parameters(&[0.3, -1.2, 2.5, 0.0]);
    let targets = [1.0, -1.0, 2.0, 0.5];
    let result = check_grad(
        |p| MSELoss::default().compute(p, &targets),
        &predictions,
        1e-6,
        1e-4,
    );
    assert!(result.is_ok(), "{:?}", result);
}
