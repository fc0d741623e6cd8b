//! Mini-batch iteration over a [`Dataset`].
//!
//! ```
//! use descent_data::{DataLoader, RegressionDataset, SequentialSampler};
//!
//! let dataset = RegressionDataset::synthetic_linear(&[1.0, -1.0], 5, 0.0, 0).unwrap();
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let sizes: Vec<usize> = loader.map(|batch| batch.unwrap().len()).collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use descent_core::{DescentError, Matrix};

/// Groups the indices produced by a [`Sampler`] into batches of dataset items.
///
/// Iterating yields one epoch. Call [`DataLoader::reset`] to draw a new epoch
/// from the sampler.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    /// Returns `DescentError::InvalidHyperparameter` if `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, DescentError> {
        if batch_size == 0 {
            return Err(DescentError::InvalidHyperparameter {
                name: "batch_size".to_string(),
                value: 0.0,
            });
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Starts a new epoch.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches in one epoch.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, DescentError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

/// Stacks `(features, target)` samples into a feature matrix and a target
/// vector.
///
/// # Errors
/// Returns `DescentError::EmptyInput` for an empty batch and
/// `DescentError::LengthMismatch` when feature rows differ in length.
pub fn collate_regression(batch: Vec<(Vec<f64>, f64)>) -> Result<(Matrix, Vec<f64>), DescentError> {
    if batch.is_empty() {
        return Err(DescentError::EmptyInput("collate_regression".to_string()));
    }
    let (rows, targets): (Vec<Vec<f64>>, Vec<f64>) = batch.into_iter().unzip();
    Ok((Matrix::from_rows(rows)?, targets))
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
