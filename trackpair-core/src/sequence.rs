// src/sequence.rs

use crate::error::TrackPairError;
use std::path::{Path, PathBuf};

/// One annotation row of a sequence, as stored by the base dataset.
///
/// The layout of the four values (e.g. `[x, y, w, h]`) is the base dataset's
/// convention and is carried through untouched.
pub type BoundingBox = [f32; 4];

/// An ordered list of frames with one bounding box per frame.
///
/// The frame and box vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    frames: Vec<PathBuf>,
    boxes: Vec<BoundingBox>,
}

impl Sequence {
    /// Creates a new `Sequence` from frame paths and their annotations.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::ShapeMismatch` if the two vectors differ in length.
    pub fn new(frames: Vec<PathBuf>, boxes: Vec<BoundingBox>) -> Result<Self, TrackPairError> {
        if frames.len() != boxes.len() {
            return Err(TrackPairError::ShapeMismatch {
                frames: frames.len(),
                boxes: boxes.len(),
            });
        }
        Ok(Self { frames, boxes })
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Path of the frame at `index`.
    pub fn frame(&self, index: usize) -> Result<&Path, TrackPairError> {
        self.frames
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(TrackPairError::IndexOutOfBounds {
                index,
                len: self.frames.len(),
            })
    }

    /// Bounding box of the frame at `index`.
    pub fn bbox(&self, index: usize) -> Result<BoundingBox, TrackPairError> {
        self.boxes
            .get(index)
            .copied()
            .ok_or(TrackPairError::IndexOutOfBounds {
                index,
                len: self.boxes.len(),
            })
    }

    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }
}

/// A sampled (template, search) pair of frame positions within one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramePair {
    /// Template frame position.
    pub z: usize,
    /// Search frame position.
    pub x: usize,
}

impl FramePair {
    pub fn new(z: usize, x: usize) -> Self {
        Self { z, x }
    }

    /// Temporal distance between the two frames.
    pub fn gap(&self) -> usize {
        self.z.abs_diff(self.x)
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod tests;
