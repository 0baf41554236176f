// trackpair-data/src/datasets/pairwise_dataset.rs

use super::traits::Dataset;
use crate::config::PairwiseConfig;
use crate::frames::{ensure_three_channel, FrameLoader, ImageFileLoader};
use crate::samplers::PairSampler;
use crate::split::build_split;
use crate::transform::{Identity, PairItem, PairTransform};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use trackpair_core::{Sequence, TrackPairError};

/// Serves (template, search) frame pairs drawn from the sequences of a base dataset.
///
/// The split index set is built once in [`PairwiseDataset::new`] and shared
/// read-only between clones, so a dataset can be cloned into every loader
/// worker. Every item request draws a fresh pair; nothing is cached.
///
/// # Type Parameters
///
/// * `D`: The base dataset, yielding one [`Sequence`] per index.
/// * `L`: Decodes the two sampled frames. Defaults to [`ImageFileLoader`].
/// * `T`: Applied to the assembled [`PairItem`]. Defaults to [`Identity`].
#[derive(Debug, Clone)]
pub struct PairwiseDataset<D, L = ImageFileLoader, T = Identity> {
    base: D,
    loader: L,
    transform: T,
    config: PairwiseConfig,
    pair_sampler: PairSampler,
    indices: Arc<[usize]>,
}

impl<D> PairwiseDataset<D>
where
    D: Dataset<Item = Sequence>,
{
    /// Creates a new `PairwiseDataset` over `base`.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::InvalidSplit` if `base` has too few sequences
    /// to give both subsets their minimum size.
    pub fn new(base: D, config: &PairwiseConfig) -> Result<Self, TrackPairError> {
        let indices = build_split(
            base.len(),
            config.subset,
            config.train_ratio,
            config.pairs_per_video,
        )?;
        debug!(
            "PairwiseDataset: {} subset with {} items (frame_range {}, causal {}, rand_choice {})",
            config.subset,
            indices.len(),
            config.frame_range,
            config.causal,
            config.rand_choice
        );
        Ok(Self {
            base,
            loader: ImageFileLoader,
            transform: Identity,
            config: config.clone(),
            pair_sampler: PairSampler::new(config.frame_range, config.causal),
            indices: indices.into(),
        })
    }
}

impl<D, L, T> PairwiseDataset<D, L, T> {
    /// Replaces the frame loader.
    pub fn with_loader<L2: FrameLoader>(self, loader: L2) -> PairwiseDataset<D, L2, T> {
        PairwiseDataset {
            base: self.base,
            loader,
            transform: self.transform,
            config: self.config,
            pair_sampler: self.pair_sampler,
            indices: self.indices,
        }
    }

    /// Replaces the transform applied to each assembled item.
    pub fn with_transform<T2: PairTransform>(self, transform: T2) -> PairwiseDataset<D, L, T2> {
        PairwiseDataset {
            base: self.base,
            loader: self.loader,
            transform,
            config: self.config,
            pair_sampler: self.pair_sampler,
            indices: self.indices,
        }
    }

    /// Sequence indices of the current subset, with training repeats included.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn config(&self) -> &PairwiseConfig {
        &self.config
    }

    pub fn pair_sampler(&self) -> &PairSampler {
        &self.pair_sampler
    }

    pub fn base(&self) -> &D {
        &self.base
    }
}

impl<D, L, T> PairwiseDataset<D, L, T>
where
    D: Dataset<Item = Sequence>,
    L: FrameLoader,
    T: PairTransform,
{
    /// Picks the base-dataset sequence served at position `index`.
    fn sequence_index<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Result<usize, TrackPairError> {
        let out_of_bounds = TrackPairError::IndexOutOfBounds {
            index,
            len: self.indices.len(),
        };
        if index >= self.indices.len() {
            return Err(out_of_bounds);
        }
        let picked = if self.config.rand_choice {
            self.indices.choose(rng)
        } else {
            self.indices.get(index)
        };
        picked.copied().ok_or(out_of_bounds)
    }

    /// Assembles the item at `index` without applying the transform.
    ///
    /// # Errors
    ///
    /// * `TrackPairError::IndexOutOfBounds` if `index >= self.len()`.
    /// * `TrackPairError::SequenceTooShort` / `EmptyCandidateSet` if the chosen
    ///   sequence cannot satisfy the configured window.
    /// * `TrackPairError::FrameLoad` if a frame fails to decode.
    pub fn sample_pair_item_with_rng<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<PairItem, TrackPairError> {
        let seq_index = self.sequence_index(index, rng)?;
        let sequence = self.base.get(seq_index)?;
        let pair = self.pair_sampler.sample(sequence.len(), rng)?;
        trace!(
            "PairwiseDataset: item {} -> sequence {} frames ({}, {})",
            index,
            seq_index,
            pair.z,
            pair.x
        );

        let frame_z = ensure_three_channel(self.loader.load(sequence.frame(pair.z)?)?);
        let frame_x = ensure_three_channel(self.loader.load(sequence.frame(pair.x)?)?);

        Ok(PairItem {
            frame_z,
            frame_x,
            box_z: sequence.bbox(pair.z)?,
            box_x: sequence.bbox(pair.x)?,
            indices: self.config.return_index.then_some(pair),
        })
    }

    /// Returns the transformed item at `index`, drawing all randomness from `rng`.
    pub fn get_with_rng<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Result<T::Output, TrackPairError> {
        let item = self.sample_pair_item_with_rng(index, rng)?;
        self.transform.apply(item)
    }
}

impl<D, L, T> Dataset for PairwiseDataset<D, L, T>
where
    D: Dataset<Item = Sequence>,
    L: FrameLoader,
    T: PairTransform,
    T::Output: Send + 'static,
{
    type Item = T::Output;

    /// Draws from the calling thread's generator; use
    /// [`PairwiseDataset::get_with_rng`] for reproducible draws.
    fn get(&self, index: usize) -> Result<Self::Item, TrackPairError> {
        self.get_with_rng(index, &mut rand::thread_rng())
    }

    fn len(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
#[path = "pairwise_dataset_test.rs"]
mod tests;
