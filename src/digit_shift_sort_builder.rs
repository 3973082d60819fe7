use crate::sorter::{PassObserver, SortStats, Sorter};
use crate::tuner::Tuner;
use crate::tuners::{StandardTuner, ThroughputTuner};
use crate::DigitKey;

static THROUGHPUT_TUNER: ThroughputTuner = ThroughputTuner { threshold: 64 };

pub struct DigitShiftSortBuilder<'a, T> {
    data: &'a mut [T],
    tuner: &'a dyn Tuner,
    observer: Option<&'a mut PassObserver<'a, T>>,
}

impl<'a, T> DigitShiftSortBuilder<'a, T>
where
    T: Copy,
{
    /// Builds a sort over any slice. Use `sort_by_key` to run it when `T` is not a `DigitKey`.
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            tuner: &StandardTuner,
            observer: None,
        }
    }

    /// Switches to counting passes for inputs of 64 values or more.
    pub fn with_throughput_tuner(mut self) -> Self {
        self.tuner = &THROUGHPUT_TUNER;

        self
    }

    pub fn with_tuner(mut self, tuner: &'a dyn Tuner) -> Self {
        self.tuner = tuner;

        self
    }

    /// Calls `observer` after every digit pass with the pass details and the bucket as it stands.
    pub fn with_pass_observer(mut self, observer: &'a mut PassObserver<'a, T>) -> Self {
        self.observer = Some(observer);

        self
    }

    pub fn sort_by_key<K>(self, key: K) -> SortStats
    where
        K: Fn(&T) -> u128,
    {
        Sorter::new(self.tuner, self.observer).sort(self.data, &key)
    }

    pub fn sort(self) -> SortStats
    where
        T: DigitKey,
    {
        self.sort_by_key(|v: &T| v.key())
    }
}
