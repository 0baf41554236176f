// dataloader.rs
//! # DataLoader
//!
//! Batches the items of any [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! ## Basic usage
//!
//! ```rust
//! use trackpair_data::dataloader::DataLoader;
//! use trackpair_data::datasets::VecDataset;
//! use trackpair_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
//! for batch in loader {
//!     let batch = batch.expect("in-memory items never fail");
//!     assert_eq!(batch.len(), 2);
//! }
//! ```
//!
//! With a `PairwiseDataset`, each batch holds `batch_size` independently
//! sampled frame pairs. An item that fails to build (for instance a sequence
//! too short for causal sampling) ends the batch with `Some(Err(_))`; the
//! loader does not retry.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use log::debug;
use trackpair_core::TrackPairError;

/// Custom collate function.
///
/// Receives the items of one batch and returns the batch handed to the
/// training loop. Without one, items are returned as a plain `Vec`.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, TrackPairError>
        + Send
        + Sync,
>;

/// Generic batching loader.
///
/// # Type Parameters
/// - `D`: The dataset type, implementing [`Dataset`].
/// - `S`: The sampler type, implementing [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    pub batch_size: usize,
    /// Generates the positions visited this epoch.
    pub sampler: S,
    /// If true, a final incomplete batch is skipped.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Arguments
    /// - `dataset`: The dataset to load from.
    /// - `batch_size`: Number of items per batch.
    /// - `sampler`: Generates the positions to visit.
    /// - `drop_last`: If true, a final incomplete batch is skipped.
    /// - `collate_fn`: Optional custom collate function.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        debug!(
            "DataLoader: {} positions, batch_size {}, drop_last {}",
            sampler.len(dataset.len()),
            batch_size,
            drop_last
        );
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Number of batches one full pass will yield.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let positions = self.sampler.len(self.dataset.len());
        if self.drop_last {
            positions / self.batch_size
        } else {
            positions.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch, asking the sampler for a fresh order.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, TrackPairError>;

    /// Returns the next batch.
    ///
    /// - `Some(Ok(batch))`: a batch ready for use.
    /// - `Some(Err(e))`: an item could not be built.
    /// - `None`: the epoch is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            if let Some(idx) = self.indices_iter.next() {
                match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        if let Some(ref collate_fn) = self.collate_fn {
            Some(collate_fn(batch))
        } else {
            Some(Ok(batch))
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
