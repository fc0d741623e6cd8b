pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod operation;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use operation::Operation;
