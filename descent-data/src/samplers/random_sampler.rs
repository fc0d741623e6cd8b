use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::Cell;

/// Visits every index exactly once per epoch, in shuffled order.
///
/// With a seed, epoch `k` is shuffled with `seed + k`, so a run is
/// reproducible while consecutive epochs still differ. Without a seed the
/// thread-local generator is used.
#[derive(Debug, Clone, Default)]
pub struct RandomSampler {
    seed: Option<u64>,
    epoch: Cell<u64>,
}

impl RandomSampler {
    pub fn new(seed: Option<u64>) -> Self {
        RandomSampler {
            seed,
            epoch: Cell::new(0),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of epochs drawn so far.
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        let epoch = self.epoch.get();
        self.epoch.set(epoch + 1);
        if dataset_len == 0 {
            log::warn!("RandomSampler: sampling from an empty dataset");
            return Box::new(std::iter::empty());
        }

        let mut indices: Vec<usize> = (0..dataset_len).collect();
        match self.seed {
            Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed.wrapping_add(epoch))),
            None => indices.shuffle(&mut rand::thread_rng()),
        }
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
