//! Scalar reverse-mode automatic differentiation.
//!
//! A [`Node`] holds a single `f64`. Arithmetic on nodes builds a computation
//! graph on the fly; calling [`Node::backward`] on a result walks that graph in
//! reverse topological order and accumulates gradients into every node that
//! requires them.
//!
//! ```
//! use descent_core::Node;
//!
//! let x = Node::parameter(2.0);
//! let y = &x * &x;
//! let z = &y + &x;
//! z.backward();
//! assert_eq!(x.grad(), 5.0);
//! ```

pub mod autograd;
pub mod error;
pub mod math;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod utils;

pub use error::DescentError;
pub use math::{Matrix, Vector};
pub use node::Node;
