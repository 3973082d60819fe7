#[derive(Debug, Clone)]
pub struct TuningParams {
    /// Zero-based index of the digit pass about to run.
    pub pass: usize,
    /// Place value of the digit this pass sorts on.
    pub exp: u128,
    pub total_passes: usize,
    pub input_len: usize,
}

/// How a single digit pass redistributes the bucket.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    /// In-place insertion-style shifting. Reproduces the reference pass-by-pass states.
    ShiftInsertion,
    /// Out-of-place counting sort, linear per pass at the cost of one temporary buffer.
    Counting,
}

pub trait Tuner {
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm;
}
