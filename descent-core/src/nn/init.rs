use crate::error::DescentError;
use crate::node::Node;
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates `count` parameters all holding `value`.
pub fn constant(count: usize, value: f64) -> Vec<Node> {
    (0..count).map(|_| Node::parameter(value)).collect()
}

/// Creates `count` parameters drawn from `U(low, high)`.
///
/// # Errors
/// Returns `DescentError::InvalidHyperparameter` if `low >= high` or either
/// bound is not finite.
pub fn uniform<R>(count: usize, low: f64, high: f64, rng: &mut R) -> Result<Vec<Node>, DescentError>
where
    R: Rng + ?Sized,
{
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(DescentError::InvalidHyperparameter {
            name: "uniform range (high - low)".to_string(),
            value: high - low,
        });
    }
    let dist = Uniform::new(low, high);
    Ok((0..count).map(|_| Node::parameter(dist.sample(rng))).collect())
}

/// Creates `count` parameters drawn from `N(mean, std²)`.
///
/// # Errors
/// Returns `DescentError::InvalidHyperparameter` if `std` is negative or not
/// finite.
pub fn normal<R>(count: usize, mean: f64, std: f64, rng: &mut R) -> Result<Vec<Node>, DescentError>
where
    R: Rng + ?Sized,
{
    let invalid_std = || DescentError::InvalidHyperparameter {
        name: "std".to_string(),
        value: std,
    };
    if !std.is_finite() || std < 0.0 {
        return Err(invalid_std());
    }
    let dist = Normal::new(mean, std).map_err(|_| invalid_std())?;
    Ok((0..count).map(|_| Node::parameter(dist.sample(rng))).collect())
}
