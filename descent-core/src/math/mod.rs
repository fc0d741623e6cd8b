//! Dense `f64` helpers used by the training loop and the data crate.
//!
//! These are plain numeric containers; they never build computation graphs.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
