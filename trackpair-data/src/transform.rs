// trackpair-data/src/transform.rs

use image::DynamicImage;
use trackpair_core::{BoundingBox, FramePair, TrackPairError};

/// A (template, search) training item, before any transform is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PairItem {
    pub frame_z: DynamicImage,
    pub frame_x: DynamicImage,
    pub box_z: BoundingBox,
    pub box_x: BoundingBox,
    /// Sampled frame positions, present only when `return_index` is set.
    pub indices: Option<FramePair>,
}

/// Post-processing stage applied to every assembled `PairItem`.
///
/// Augmentation, cropping and tensor conversion live behind this trait; the
/// dataset only decides which frames go in.
pub trait PairTransform {
    type Output;

    fn apply(&self, item: PairItem) -> Result<Self::Output, TrackPairError>;
}

/// Returns the item unchanged. Used when no transform is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl PairTransform for Identity {
    type Output = PairItem;

    fn apply(&self, item: PairItem) -> Result<PairItem, TrackPairError> {
        Ok(item)
    }
}

/// Adapts a closure into a `PairTransform`.
///
/// ```
/// use image::GenericImageView;
/// use trackpair_data::transform::{FnTransform, PairItem};
/// use trackpair_data::TrackPairError;
///
/// // Keep only the frame sizes
/// let sizes = FnTransform::new(|item: PairItem| {
///     Ok::<_, TrackPairError>((item.frame_z.dimensions(), item.frame_x.dimensions()))
/// });
/// # let _ = sizes;
/// ```
#[derive(Clone)]
pub struct FnTransform<F> {
    f: F,
}

impl<F> FnTransform<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for FnTransform<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnTransform")
    }
}

impl<F, O> PairTransform for FnTransform<F>
where
    F: Fn(PairItem) -> Result<O, TrackPairError>,
{
    type Output = O;

    fn apply(&self, item: PairItem) -> Result<O, TrackPairError> {
        (self.f)(item)
    }
}
