// trackpair-data/src/frames.rs
//! Frame decoding for the pairwise datasets.
//!
//! Decoding sits behind the `FrameLoader` trait so that datasets can be driven
//! from memory in tests, or from a cache in production. `ImageFileLoader`
//! decodes straight from disk with the `image` crate.

use image::{ColorType, DynamicImage};
use log::trace;
use std::path::Path;
use trackpair_core::TrackPairError;

/// Turns a frame reference into a decoded image.
pub trait FrameLoader {
    /// Loads the frame at `frame`.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::FrameLoad` if the frame cannot be read or decoded.
    fn load(&self, frame: &Path) -> Result<DynamicImage, TrackPairError>;
}

/// Decodes frames from the filesystem, picking the format from the file contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileLoader;

impl ImageFileLoader {
    pub fn new() -> Self {
        ImageFileLoader
    }
}

impl FrameLoader for ImageFileLoader {
    fn load(&self, frame: &Path) -> Result<DynamicImage, TrackPairError> {
        trace!("Decoding frame {}", frame.display());
        image::open(frame).map_err(|e| TrackPairError::FrameLoad {
            path: frame.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Expands single-channel frames to three channels.
///
/// `L8` becomes `Rgb8` and `L16` becomes `Rgb16`; every other colour type is
/// returned as is.
pub fn ensure_three_channel(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 => DynamicImage::ImageRgb8(img.to_rgb8()),
        ColorType::L16 => DynamicImage::ImageRgb16(img.to_rgb16()),
        _ => img,
    }
}

#[cfg(test)]
#[path = "frames_test.rs"]
mod tests;
