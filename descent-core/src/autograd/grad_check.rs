use crate::error::DescentError;
use crate::node::Node;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(DescentError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input node must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<DescentError> for GradCheckError {
    fn from(err: DescentError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is evaluated once on `inputs` and differentiated with
/// [`Node::backward`]. Then, for every input that requires gradients, it is
/// re-evaluated on fresh, untracked leaves with that input shifted by
/// `±epsilon`, giving `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// The two gradients agree when they are within `tolerance`, either
/// absolutely or relative to the larger magnitude.
///
/// Gradients of `inputs` are zeroed before and after the check.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, DescentError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- 1. Analytical gradients ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs)?;

    let any_input_requires_grad = inputs.iter().any(Node::requires_grad);
    if any_input_requires_grad && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    output.backward();

    let analytical_grads: Vec<f64> = inputs.iter().map(Node::grad).collect();
    for input in inputs {
        input.zero_grad();
    }

    // --- 2. Numerical gradients ---
    let values: Vec<f64> = inputs.iter().map(Node::value).collect();
    let evaluate = |index: usize, shift: f64| -> Result<f64, GradCheckError> {
        let shifted: Vec<Node> = values
            .iter()
            .enumerate()
            .map(|(j, &v)| Node::new(if j == index { v + shift } else { v }))
            .collect();
        Ok(func(&shifted)?.value())
    };

    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }

        let analytical_grad = analytical_grads[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(i, epsilon)?;
        let loss_minus = evaluate(i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
