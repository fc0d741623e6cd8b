use super::traits::Dataset;
use descent_core::{DescentError, Matrix, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Feature rows paired with scalar regression targets.
#[derive(Debug, Clone)]
pub struct RegressionDataset {
    features: Matrix,
    targets: Vector,
}

impl RegressionDataset {
    /// # Errors
    /// Returns `DescentError::LengthMismatch` if the number of targets differs
    /// from the number of feature rows.
    pub fn new(features: Matrix, targets: Vector) -> Result<Self, DescentError> {
        if features.rows() != targets.len() {
            return Err(DescentError::LengthMismatch {
                expected: features.rows(),
                actual: targets.len(),
                operation: "RegressionDataset::new".to_string(),
            });
        }
        Ok(RegressionDataset { features, targets })
    }

    /// Generates `y = weights . x + noise` with features drawn uniformly from
    /// `[-1, 1)` and Gaussian noise of standard deviation `noise_std`.
    ///
    /// The same `seed` always produces the same dataset.
    ///
    /// # Errors
    /// Returns `DescentError::InvalidHyperparameter` if `noise_std` is negative
    /// or not finite.
    pub fn synthetic_linear(
        weights: &[f64],
        n_samples: usize,
        noise_std: f64,
        seed: u64,
    ) -> Result<Self, DescentError> {
        let invalid_noise = || DescentError::InvalidHyperparameter {
            name: "noise_std".to_string(),
            value: noise_std,
        };
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(invalid_noise());
        }
        let noise = Normal::new(0.0, noise_std).map_err(|_| invalid_noise())?;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut rows = Vec::with_capacity(n_samples);
        let mut targets = Vec::with_capacity(n_samples);
        for _ in 0..n_samples {
            let row: Vec<f64> = weights.iter().map(|_| rng.gen_range(-1.0..1.0)).collect();
            let clean: f64 = row.iter().zip(weights).map(|(x, w)| x * w).sum();
            targets.push(clean + noise.sample(&mut rng));
            rows.push(row);
        }
        log::debug!(
            "synthetic_linear: {} samples, {} features, noise_std={}",
            n_samples,
            weights.len(),
            noise_std
        );

        let features = if rows.is_empty() {
            Matrix::zeros(0, weights.len())
        } else {
            Matrix::from_rows(rows)?
        };
        Self::new(features, Vector::new(targets))
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn targets(&self) -> &Vector {
        &self.targets
    }

    pub fn num_features(&self) -> usize {
        self.features.cols()
    }
}

impl Dataset for RegressionDataset {
    type Item = (Vec<f64>, f64);

    fn get(&self, index: usize) -> Result<Self::Item, DescentError> {
        if index >= self.len() {
            return Err(DescentError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok((self.features.row(index).to_vec(), self.targets[index]))
    }

    fn len(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
#[path = "regression_dataset_test.rs"]
mod tests;
