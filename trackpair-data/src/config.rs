// trackpair-data/src/config.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use trackpair_core::TrackPairError;

/// Which side of the train/val split a `PairwiseDataset` exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    #[default]
    Train,
    Val,
}

impl FromStr for Subset {
    type Err = TrackPairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Subset::Train),
            "val" => Ok(Subset::Val),
            other => Err(TrackPairError::Config(format!(
                "unknown subset '{}', expected 'train' or 'val'",
                other
            ))),
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::Train => write!(f, "train"),
            Subset::Val => write!(f, "val"),
        }
    }
}

/// Options recognised by `PairwiseDataset`.
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairwiseConfig {
    /// How many times the training index set is repeated per epoch.
    pub pairs_per_video: usize,
    /// Half-width of the temporal window around the template frame.
    pub frame_range: usize,
    /// Restrict the search frame to come strictly after the template frame.
    pub causal: bool,
    /// Report the sampled frame positions alongside the item.
    pub return_index: bool,
    /// Draw the sequence at random instead of reading it positionally.
    pub rand_choice: bool,
    pub subset: Subset,
    /// Fraction of the base dataset assigned to the training subset.
    pub train_ratio: f64,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            pairs_per_video: 25,
            frame_range: 100,
            causal: false,
            return_index: false,
            rand_choice: true,
            subset: Subset::Train,
            train_ratio: 0.95,
        }
    }
}

impl PairwiseConfig {
    /// Parses a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::Config` if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, TrackPairError> {
        serde_json::from_str(json).map_err(|e| TrackPairError::Config(e.to_string()))
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TrackPairError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            TrackPairError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_pairs_per_video(mut self, pairs_per_video: usize) -> Self {
        self.pairs_per_video = pairs_per_video;
        self
    }

    pub fn with_frame_range(mut self, frame_range: usize) -> Self {
        self.frame_range = frame_range;
        self
    }

    pub fn with_causal(mut self, causal: bool) -> Self {
        self.causal = causal;
        self
    }

    pub fn with_return_index(mut self, return_index: bool) -> Self {
        self.return_index = return_index;
        self
    }

    pub fn with_rand_choice(mut self, rand_choice: bool) -> Self {
        self.rand_choice = rand_choice;
        self
    }

    pub fn with_subset(mut self, subset: Subset) -> Self {
        self.subset = subset;
        self
    }

    pub fn with_train_ratio(mut self, train_ratio: f64) -> Self {
        self.train_ratio = train_ratio;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
