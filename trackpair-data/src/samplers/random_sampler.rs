// trackpair-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Visits a random permutation of the dataset positions each epoch.
///
/// Without a seed every call to `iter` draws a fresh order from entropy. With
/// a seed the order is reproducible, which is the only way to get a fixed epoch
/// order out of the loading pipeline.
#[derive(Debug, Clone, Default)]
pub struct RandomSampler {
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `num_samples`: Cap on the positions visited per epoch. `None` visits all of them.
    pub fn new(num_samples: Option<usize>) -> Self {
        RandomSampler {
            num_samples,
            seed: None,
        }
    }

    /// Fixes the permutation to the one produced by `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let amount = self.len(dataset_len);
        if self.num_samples.map_or(false, |n| n > dataset_len) {
            warn!(
                "RandomSampler: num_samples ({:?}) > dataset_len ({}), visiting {} positions",
                self.num_samples, dataset_len, amount
            );
        }
        if amount == 0 {
            return Box::new(std::iter::empty());
        }
        let mut rng = self.rng();
        let picked = index::sample(&mut rng, dataset_len, amount).into_vec();
        Box::new(picked.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.map_or(dataset_len, |n| n.min(dataset_len))
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
