//! Frame-pair sampling for training visual object trackers.
//!
//! A [`PairwiseDataset`] wraps a base dataset of annotated [`Sequence`]s and
//! serves (template, search) frame pairs taken from one sequence at a time,
//! within a configurable temporal window. The train/val split and the
//! per-epoch repeat factor are resolved once, at construction.
//!
//! ```no_run
//! use trackpair_data::{DataLoader, PairwiseConfig, PairwiseDataset, RandomSampler, VecDataset};
//!
//! # fn load_sequences() -> Vec<trackpair_data::Sequence> { Vec::new() }
//! let base = VecDataset::new(load_sequences());
//! let config = PairwiseConfig::default().with_frame_range(100);
//! let dataset = PairwiseDataset::new(base, &config).expect("at least 20 sequences");
//! let loader = DataLoader::new(dataset, 8, RandomSampler::new(None), true, None);
//! for batch in loader {
//!     let pairs = batch.expect("frames decode");
//!     # let _ = pairs;
//! }
//! ```

pub mod config;
pub mod dataloader;
pub mod datasets;
pub mod frames;
pub mod samplers;
pub mod split;
pub mod transform;

// Re-export main components
pub use config::{PairwiseConfig, Subset};
pub use dataloader::DataLoader;
pub use datasets::{Dataset, PairwiseDataset, VecDataset};
pub use frames::{ensure_three_channel, FrameLoader, ImageFileLoader};
pub use samplers::{PairSampler, RandomSampler, Sampler, SequentialSampler};
pub use split::build_split;
pub use transform::{FnTransform, Identity, PairItem, PairTransform};
pub use trackpair_core::{BoundingBox, FramePair, Sequence, TrackPairError};
