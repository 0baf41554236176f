// trackpair-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset positions.
///
/// This is distinct from `PairSampler`, which works inside a single sequence.
/// A `Sampler` only ever sees the length of the dataset it drives.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the positions to visit for one epoch.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The value of `Dataset::len()` for the driven dataset.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of positions the iterator will yield.
    fn len(&self, dataset_len: usize) -> usize;
}
