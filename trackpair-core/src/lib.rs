// Shared building blocks for the TrackPair crates: the error type and the
// sequence data model handed around by the datasets.

pub mod error;
pub mod sequence;

pub use error::TrackPairError;
pub use sequence::{BoundingBox, FramePair, Sequence};
