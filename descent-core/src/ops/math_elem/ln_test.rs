// descent-core/src/ops/math_elem/ln_test.rs

use super::*;
use crate::utils::testing::assert_grad_matches_finite_difference;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_basic() {
    assert_eq!(ln_op(&Node::new(1.0)).value(), 0.0);
    assert_relative_eq!(ln_op(&Node::new(std::f64::consts::E)).value(), 1.0);
}

#[test]
fn test_ln_forward_non_positive() {
    let zero = ln_op(&Node::new(0.0)).value();
    assert!(zero.is_infinite(), "ln(0.0) should be infinite");
    assert!(zero.is_sign_negative(), "ln(0.0) should be negative infinity");

    let negative = ln_op(&Node::new(-1.0)).value();
    assert!(negative.is_nan());
}

#[test]
fn test_ln_backward() {
    let a = Node::parameter(4.0);
    let b = a.ln();
    b.backward();
    assert_relative_eq!(a.grad(), 0.25);
}

#[test]
fn test_log_is_ln() {
    let a = Node::parameter(2.0);
    let b = a.log();
    assert_eq!(b.grad_fn().unwrap().name(), "ln");
    assert_relative_eq!(b.value(), 2.0f64.ln());
}

#[test]
fn test_log_base() {
    let x = Node::parameter(8.0);
    let base = Node::new(2.0);
    let y = x.log_base(&base);
    assert_relative_eq!(y.value(), 3.0, epsilon = 1e-12);
    y.backward();
    assert_relative_eq!(x.grad(), 1.0 / (8.0 * 2.0f64.ln()), epsilon = 1e-12);
    assert_eq!(base.grad(), 0.0);
}

#[test]
fn test_ln_nan_propagates_to_gradient() {
    let a = Node::parameter(-1.0);
    let l = a.ln();
    let b = &l * &l;
    assert!(b.value().is_nan());
    b.backward();
    assert!(a.grad().is_nan());
}

#[test]
fn test_ln_nan_value_does_not_reach_untracked_path() {
    // d(2 * ln a)/da only needs 1/a, so the gradient stays finite.
    let a = Node::parameter(-1.0);
    let b = &a.ln() * 2.0;
    assert!(b.value().is_nan());
    b.backward();
    assert_relative_eq!(a.grad(), -2.0);
}

#[test]
fn test_ln_grad_check() {
    assert_grad_matches_finite_difference(|n| ln_op(&n[0]), 1, 0.1..10.0);
}

#[test]
fn test_log_base_grad_check() {
    assert_grad_matches_finite_difference(|n| n[0].log_base(&n[1]), 2, 1.5..10.0);
}
