use super::*;
use crate::utils::testing::assert_grad_matches_finite_difference;

#[test]
fn test_add_forward() {
    let a = Node::new(1.5);
    let b = Node::new(-4.0);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), -2.5);
    assert!(!c.requires_grad());
    assert!(c.is_leaf(), "untracked results carry no operation");
}

#[test]
fn test_add_backward() {
    let a = Node::parameter(1.0);
    let b = Node::parameter(2.0);
    let c = add_op(&a, &b);
    assert!(c.requires_grad());
    assert_eq!(c.grad_fn().unwrap().name(), "add");

    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_input_twice() {
    let a = Node::parameter(3.0);
    let c = add_op(&a, &a);
    assert_eq!(c.value(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_operator_forms() {
    let a = Node::parameter(2.0);
    assert_eq!((&a + 1.0).value(), 3.0);
    assert_eq!((1.0 + &a).value(), 3.0);
    assert_eq!((a.clone() + a.clone()).value(), 4.0);

    let c = 10.0 + &a;
    c.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_add_grad_check() {
    assert_grad_matches_finite_difference(|n| add_op(&n[0], &n[1]), 2, -5.0..5.0);
}
