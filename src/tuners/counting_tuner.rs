use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct CountingTuner;

impl Tuner for CountingTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams) -> Algorithm {
        Algorithm::Counting
    }
}
