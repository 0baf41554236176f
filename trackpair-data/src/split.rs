// trackpair-data/src/split.rs

use crate::config::Subset;
use log::{debug, warn};
use trackpair_core::TrackPairError;

/// Minimum number of sequences kept on each side of the split.
pub const MIN_SUBSET_LEN: usize = 10;

/// Resolves the split point for `total_length` sequences.
///
/// The raw point is `floor(total_length * train_ratio)`, clamped to
/// `[MIN_SUBSET_LEN, total_length - MIN_SUBSET_LEN]`. `train_ratio` is not
/// range-checked; values outside `(0, 1)` simply land on a clamp bound.
///
/// # Errors
///
/// Returns `TrackPairError::InvalidSplit` when `total_length < 2 * MIN_SUBSET_LEN`,
/// since the clamp range would be empty.
pub fn split_point(total_length: usize, train_ratio: f64) -> Result<usize, TrackPairError> {
    let minimum = 2 * MIN_SUBSET_LEN;
    if total_length < minimum {
        return Err(TrackPairError::InvalidSplit {
            total_length,
            minimum,
        });
    }

    // NaN and negative products saturate to 0 on the cast
    let raw = (total_length as f64 * train_ratio).floor() as usize;
    let split = raw.clamp(MIN_SUBSET_LEN, total_length - MIN_SUBSET_LEN);
    if split != raw {
        warn!(
            "train_ratio {} gives split {} for {} sequences, clamped to {}",
            train_ratio, raw, total_length, split
        );
    }
    Ok(split)
}

/// Builds the sequence indices visible to one subset.
///
/// - `Subset::Train`: `[0, split)` concatenated `pairs_per_video` times.
/// - `Subset::Val`: `[split, total_length)` once; `pairs_per_video` is ignored.
///
/// # Examples
///
/// ```
/// use trackpair_data::config::Subset;
/// use trackpair_data::split::build_split;
///
/// let train = build_split(1000, Subset::Train, 0.95, 25).unwrap();
/// assert_eq!(train.len(), 25 * 950);
/// let val = build_split(1000, Subset::Val, 0.95, 25).unwrap();
/// assert_eq!(val.len(), 50);
/// ```
pub fn build_split(
    total_length: usize,
    subset: Subset,
    train_ratio: f64,
    pairs_per_video: usize,
) -> Result<Vec<usize>, TrackPairError> {
    let split = split_point(total_length, train_ratio)?;

    let indices: Vec<usize> = match subset {
        Subset::Train => {
            if pairs_per_video == 0 {
                warn!("pairs_per_video is 0, the training subset is empty");
            }
            let base: Vec<usize> = (0..split).collect();
            base.repeat(pairs_per_video)
        }
        Subset::Val => (split..total_length).collect(),
    };

    debug!(
        "{} split of {} sequences at {}: {} indices",
        subset,
        total_length,
        split,
        indices.len()
    );
    Ok(indices)
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
