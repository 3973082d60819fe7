use crate::DigitKey;
use block_pseudorand::block_rand;
use rand::{thread_rng, Rng};
use std::fmt::Debug;
use std::ops::{ShlAssign, ShrAssign};

pub trait NumericTest<T>:
    DigitKey + Sized + Copy + Debug + PartialEq + Ord + Send + Sync + ShrAssign + ShlAssign
{
}

impl<T> NumericTest<T> for T where
    T: DigitKey + Sized + Copy + Debug + PartialEq + Ord + Send + Sync + ShrAssign + ShlAssign
{
}

/// A key carrying its original position, so stability can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: u32,
    pub tag: usize,
}

impl Tagged {
    pub fn new(key: u32, tag: usize) -> Self {
        Self { key, tag }
    }
}

impl DigitKey for Tagged {
    #[inline]
    fn key(&self) -> u128 {
        self.key as u128
    }
}

pub fn gen_inputs<T>(n: usize, shift: T) -> Vec<T>
where
    T: NumericTest<T>,
{
    let mut inputs: Vec<T> = block_rand(n);

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v <<= shift);

    inputs
}

/// Shift-insertion passes are quadratic, so the sets stay small.
pub fn gen_input_set<T>(shift: T) -> Vec<Vec<T>>
where
    T: NumericTest<T>,
{
    let n = 1_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 1)..(half + 1)].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 250)..(half + 250)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

pub fn gen_tagged_inputs(n: usize, key_range: u32) -> Vec<Tagged> {
    let mut rng = thread_rng();

    (0..n)
        .map(|tag| Tagged::new(rng.gen_range(0..key_range), tag))
        .collect()
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest<T>,
    F: Fn(&mut [T]),
{
    let mut inputs_clone = inputs.clone();

    sort_fn(&mut inputs);
    inputs_clone.sort();

    assert_eq!(inputs, inputs_clone);
}

pub fn sort_comparison_suite<T, F>(shift: T, sort_fn: F)
where
    F: Fn(&mut [T]),
    T: NumericTest<T>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

/// Checks a full sort of tagged values against the standard library's stable sort.
pub fn stable_sort_suite<F>(sort_fn: F)
where
    F: Fn(&mut [Tagged]),
{
    for (n, key_range) in [(0, 10), (1, 10), (2, 1), (100, 5), (500, 50), (1_000, 100_000)] {
        let mut inputs = gen_tagged_inputs(n, key_range);
        let mut expected = inputs.clone();

        sort_fn(&mut inputs);
        expected.sort_by_key(|t| t.key);

        assert_eq!(inputs, expected, "n = {}, key range = {}", n, key_range);
    }
}

/// Checks a single digit pass against a stable sort on that digit alone.
pub fn pass_comparison_suite<F>(pass_fn: F)
where
    F: Fn(&mut [Tagged], u128),
{
    for n in [0, 1, 2, 10, 300] {
        for exp in [1u128, 10, 100, 1_000] {
            let mut inputs = gen_tagged_inputs(n, 10_000);
            let mut expected = inputs.clone();

            pass_fn(&mut inputs, exp);
            expected.sort_by_key(|t| t.digit(exp));

            assert_eq!(inputs, expected, "n = {}, exp = {}", n, exp);
        }
    }
}
