pub mod traits;
pub mod vec_dataset;
pub mod pairwise_dataset;

pub use traits::Dataset;
pub use vec_dataset::VecDataset;
pub use pairwise_dataset::PairwiseDataset;
