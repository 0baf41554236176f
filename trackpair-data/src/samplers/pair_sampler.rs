// trackpair-data/src/samplers/pair_sampler.rs

use rand::seq::SliceRandom;
use rand::Rng;
use trackpair_core::{FramePair, TrackPairError};

/// Draws (template, search) frame positions within a single sequence.
///
/// The search frame is taken from the window `[z - frame_range, z + frame_range]`
/// around the template frame `z`, clipped to the sequence. In causal mode only
/// frames strictly after `z` qualify; otherwise any frame but `z` does. A
/// `frame_range` of 0 always yields `(z, z)`.
///
/// The generator is passed in by the caller, so the sampler itself holds no
/// random state and can be shared freely between workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSampler {
    frame_range: usize,
    causal: bool,
}

impl PairSampler {
    /// Creates a new `PairSampler`.
    ///
    /// # Arguments
    ///
    /// * `frame_range`: Half-width of the temporal window around the template frame.
    /// * `causal`: If `true`, the search frame always comes after the template frame.
    pub fn new(frame_range: usize, causal: bool) -> Self {
        PairSampler { frame_range, causal }
    }

    pub fn frame_range(&self) -> usize {
        self.frame_range
    }

    pub fn causal(&self) -> bool {
        self.causal
    }

    /// Draws the template position for a sequence of `n` frames.
    ///
    /// Uniform over `[0, n - 1)` in causal mode (the last frame has no later
    /// frame to pair with), `[0, n)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::SequenceTooShort` if the draw range is empty.
    pub fn sample_anchor<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<usize, TrackPairError> {
        let required = if self.causal { 2 } else { 1 };
        if n < required {
            return Err(TrackPairError::SequenceTooShort { len: n, required });
        }
        let upper = if self.causal { n - 1 } else { n };
        Ok(rng.gen_range(0..upper))
    }

    /// Lists the valid search positions for template `z` in a sequence of `n` frames,
    /// in increasing order.
    ///
    /// With `frame_range == 0` the only candidate is `z` itself.
    pub fn candidates(&self, n: usize, z: usize) -> Vec<usize> {
        if n == 0 || z >= n {
            return Vec::new();
        }
        if self.frame_range == 0 {
            return vec![z];
        }
        let lo = z.saturating_sub(self.frame_range);
        let hi = z.saturating_add(self.frame_range).min(n - 1);
        if self.causal {
            (z + 1..=hi).collect()
        } else {
            (lo..=hi).filter(|&x| x != z).collect()
        }
    }

    /// Draws the search position for a fixed template `z`.
    ///
    /// # Errors
    ///
    /// Returns `TrackPairError::EmptyCandidateSet` if no frame satisfies the
    /// window constraints. This is a configuration/data mismatch, so no retry
    /// is attempted.
    pub fn sample_search<R: Rng + ?Sized>(
        &self,
        n: usize,
        z: usize,
        rng: &mut R,
    ) -> Result<usize, TrackPairError> {
        self.candidates(n, z)
            .choose(rng)
            .copied()
            .ok_or(TrackPairError::EmptyCandidateSet {
                anchor: z,
                frame_range: self.frame_range,
                causal: self.causal,
                len: n,
            })
    }

    /// Draws a full (template, search) pair for a sequence of `n` frames.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<FramePair, TrackPairError> {
        let z = self.sample_anchor(n, rng)?;
        if self.frame_range == 0 {
            return Ok(FramePair::new(z, z));
        }
        let x = self.sample_search(n, z, rng)?;
        Ok(FramePair::new(z, x))
    }
}

#[cfg(test)]
#[path = "pair_sampler_test.rs"]
mod tests;
