// trackpair-data/src/samplers/sequential_sampler.rs

use super::traits::Sampler;

/// Visits every position in order, `0..dataset_len`.
///
/// Combined with a `PairwiseDataset` built with `rand_choice = false`, this
/// walks the split index set exactly as it was built.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(0..dataset_len)
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
