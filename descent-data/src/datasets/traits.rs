use descent_core::DescentError;

/// Indexed access to individual samples.
///
/// `Item` is the type of a single sample, for example a `(features, target)`
/// pair.
pub trait Dataset {
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// Returns `DescentError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, DescentError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
