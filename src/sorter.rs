use crate::sorts::{counting_pass, shift_insertion_pass};
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::*;
use log::{debug, trace};

/// Describes a digit pass that has just completed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PassInfo {
    pub pass: usize,
    pub exp: u128,
    pub algorithm: Algorithm,
}

/// Work done by one sort.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Digit passes run. Equal to the number of decimal digits in the largest key, or zero for
    /// inputs of fewer than two values.
    pub passes: usize,
    /// Element relocations summed over every pass.
    pub moves: usize,
}

pub type PassObserver<'a, T> = dyn FnMut(&PassInfo, &[T]) + 'a;

pub struct Sorter<'a, T> {
    tuner: &'a dyn Tuner,
    observer: Option<&'a mut PassObserver<'a, T>>,
}

impl<'a, T> Sorter<'a, T>
where
    T: Copy,
{
    pub fn new(tuner: &'a dyn Tuner, observer: Option<&'a mut PassObserver<'a, T>>) -> Self {
        Self { tuner, observer }
    }

    pub fn sort<K>(&mut self, bucket: &mut [T], key: &K) -> SortStats
    where
        K: Fn(&T) -> u128,
    {
        let mut stats = SortStats::default();

        // By definition, this is already sorted
        if bucket.len() <= 1 {
            return stats;
        }

        let max = get_max_key(bucket, key);
        let total_passes = digit_passes(max);
        let mut tmp_bucket: Option<Vec<T>> = None;

        debug!(
            "sorting {} values, max key {}, {} digit passes",
            bucket.len(),
            max,
            total_passes
        );

        for (pass, exp) in place_values(max).enumerate() {
            let tp = TuningParams {
                pass,
                exp,
                total_passes,
                input_len: bucket.len(),
            };
            let algorithm = self.tuner.pick_algorithm(&tp);

            let moves = match algorithm {
                Algorithm::ShiftInsertion => shift_insertion_pass(bucket, exp, key),
                Algorithm::Counting => {
                    let tmp = tmp_bucket.get_or_insert_with(|| bucket.to_vec());
                    counting_pass(bucket, tmp, exp, key)
                }
            };

            trace!("({}) exp {} {:?}: {} moves", pass, exp, algorithm, moves);

            stats.passes += 1;
            stats.moves += moves;

            if let Some(observer) = self.observer.as_deref_mut() {
                observer(&PassInfo { pass, exp, algorithm }, &*bucket);
            }
        }

        stats
    }
}
