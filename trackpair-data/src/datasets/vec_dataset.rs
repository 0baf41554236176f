use super::traits::Dataset;
use trackpair_core::{Sequence, TrackPairError};

/// In-memory dataset backed by a `Vec`.
///
/// `VecDataset<Sequence>` is the simplest base dataset for a `PairwiseDataset`:
/// file indexing and annotation parsing happen elsewhere, and the resulting
/// sequences are handed over here.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl VecDataset<Sequence> {
    /// Total number of frames across all sequences.
    pub fn total_frames(&self) -> usize {
        self.data.iter().map(Sequence::len).sum()
    }
}

impl<T: Clone + Send + 'static> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, TrackPairError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(TrackPairError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
