use super::*;
use crate::utils::testing::assert_grad_matches_finite_difference;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let c = pow_op(&Node::new(2.0), &Node::new(3.0));
    assert_eq!(c.value(), 8.0);
    assert!(!c.requires_grad());
}

#[test]
fn test_pow_backward_both_operands() {
    let a = Node::parameter(2.0);
    let b = Node::parameter(3.0);
    let c = pow_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), 12.0); // 3 * 2^2
    assert_relative_eq!(b.grad(), 8.0 * 2.0f64.ln());
}

#[test]
fn test_powf_constant_exponent() {
    let x = Node::parameter(3.0);
    let y = x.powf(2.0);
    assert_eq!(y.value(), 9.0);
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
}

#[test]
fn test_scalar_pow_constant_base() {
    let x = Node::parameter(3.0);
    let y = Node::scalar_pow(2.0, &x);
    assert_eq!(y.value(), 8.0);
    y.backward();
    assert_relative_eq!(x.grad(), 8.0 * 2.0f64.ln());
}

#[test]
fn test_pow_negative_base_exponent_grad_is_nan() {
    let a = Node::parameter(-2.0);
    let b = Node::parameter(2.0);
    let c = a.pow(&b);
    assert_eq!(c.value(), 4.0);
    c.backward();
    assert_relative_eq!(a.grad(), -4.0);
    assert!(b.grad().is_nan());
}

#[test]
fn test_pow_negative_base_constant_exponent_is_finite() {
    // The NaN exponent gradient is computed but never accumulated.
    let a = Node::parameter(-2.0);
    let c = a.powf(3.0);
    c.backward();
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn test_pow_grad_check() {
    assert_grad_matches_finite_difference(|n| pow_op(&n[0], &n[1]), 2, 0.5..3.0);
}
