use thiserror::Error;

/// Custom error type for the Descent framework.
///
/// Numerical domain problems (division by zero, `ln` of a negative value) are
/// never reported here: they surface as IEEE infinities or NaN in node values
/// and gradients. This enum covers structural misuse of the collaborators built
/// on top of the engine (losses, optimizers, matrices, datasets).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DescentError {
    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: String,
    },

    #[error("Empty input for operation {0}")]
    EmptyInput(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
