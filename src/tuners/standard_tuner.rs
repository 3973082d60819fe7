//! `StandardTuner` is the default tuning used by `digit_shift_sort`.
//!
//! StandardTuner algorithm choice is:
//!  * in-place only
//!  * shift-insertion for every digit pass
use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct StandardTuner;

impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams) -> Algorithm {
        Algorithm::ShiftInsertion
    }
}
