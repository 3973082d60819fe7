//! `ThroughputTuner` trades the in-place guarantee for linear digit passes on larger inputs.
//!
//! ThroughputTuner algorithm choice is:
//!  * shift-insertion below `threshold` elements
//!  * counting at or above it, allocating a single temporary buffer reused by every pass
use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct ThroughputTuner {
    pub threshold: usize,
}

impl Default for ThroughputTuner {
    fn default() -> Self {
        Self { threshold: 64 }
    }
}

impl Tuner for ThroughputTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        if p.input_len < self.threshold {
            Algorithm::ShiftInsertion
        } else {
            Algorithm::Counting
        }
    }
}
