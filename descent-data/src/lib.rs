//! Datasets, index samplers and mini-batch loading on top of `descent-core`.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::{collate_regression, DataLoader};
pub use datasets::{Dataset, RegressionDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
