pub mod regression_dataset;
pub mod traits;

pub use regression_dataset::RegressionDataset;
pub use traits::Dataset;
