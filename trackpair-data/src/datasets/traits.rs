// trackpair-data/src/datasets/traits.rs

use trackpair_core::TrackPairError;

/// Indexed, length-aware collection of training items.
///
/// Both ends of the pairwise pipeline speak this protocol: the base dataset
/// implements it with `Item = Sequence`, and `PairwiseDataset` implements it
/// again on top, yielding frame pairs.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    ///
    /// `Send + 'static` so that items can be handed to loader workers.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::IndexOutOfBounds` if `index >= self.len()`, or
    /// whatever error building the item produced.
    fn get(&self, index: usize) -> Result<Self::Item, TrackPairError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, TrackPairError> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
