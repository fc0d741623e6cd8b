use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns an iterator over indices in `0..dataset_len` for one epoch.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices one epoch yields.
    fn len(&self, dataset_len: usize) -> usize;
}
