use crate::autograd::grad_check::check_grad;
use crate::node::Node;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Step used for central differences in the test helpers.
pub const GRAD_CHECK_EPSILON: f64 = 1e-6;
/// Relative (and absolute) tolerance used by the test helpers.
pub const GRAD_CHECK_TOLERANCE: f64 = 1e-4;

const GRAD_CHECK_TRIALS: usize = 20;

/// Helper to create trainable leaves from raw values.
pub fn create_parameters(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::parameter(v)).collect()
}

/// Helper to create constant (untracked) leaves from raw values.
pub fn create_constants(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::new(v)).collect()
}

/// Checks `func` against finite differences on random inputs.
///
/// Draws `arity` trainable leaves uniformly from `domain` (seeded, so failures
/// reproduce), repeats for a fixed number of trials, and panics with the
/// offending inputs on the first mismatch.
pub fn assert_grad_matches_finite_difference<F>(func: F, arity: usize, domain: Range<f64>)
where
    F: Fn(&[Node]) -> Node,
{
    let mut rng = StdRng::seed_from_u64(42);
    for trial in 0..GRAD_CHECK_TRIALS {
        let values: Vec<f64> = (0..arity).map(|_| rng.gen_range(domain.clone())).collect();
        let inputs = create_parameters(&values);
        if let Err(e) = check_grad(
            |n| Ok(func(n)),
            &inputs,
            GRAD_CHECK_EPSILON,
            GRAD_CHECK_TOLERANCE,
        ) {
            panic!(
                "Gradient check failed on trial {} with inputs {:?}: {}",
                trial, values, e
            );
        }
    }
}
