// Optimizers and the configuration they are driven by.
pub mod config;
pub mod gradient_descent;
pub mod vanilla;

pub use config::TrainingConfig;
pub use gradient_descent::{linear_predictions, GradientDescent, TrainingHistory};
pub use vanilla::Vanilla;
