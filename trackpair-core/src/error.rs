use thiserror::Error;

/// Custom error type for the TrackPair crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum TrackPairError {
    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Sequence too short: {len} frames, at least {required} required")]
    SequenceTooShort { len: usize, required: usize },

    #[error(
        "No search frame candidate for anchor {anchor} (frame_range {frame_range}, causal {causal}, sequence length {len})"
    )]
    EmptyCandidateSet {
        anchor: usize,
        frame_range: usize,
        causal: bool,
        len: usize,
    },

    #[error("Cannot split {total_length} sequences into train/val subsets: at least {minimum} required")]
    InvalidSplit { total_length: usize, minimum: usize },

    #[error("Shape mismatch: {frames} frames but {boxes} bounding boxes")]
    ShapeMismatch { frames: usize, boxes: usize },

    #[error("Failed to load frame {path}: {message}")]
    FrameLoad { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transform error: {0}")]
    Transform(String),
}
