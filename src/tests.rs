use crate::test_utils::{gen_inputs, gen_tagged_inputs, Tagged};
use crate::tuner::Algorithm;
use crate::tuners::CountingTuner;
use crate::{digit_shift_sort, is_sorted_by_key, DigitKey, DigitShiftSort, PassInfo};
use rand::{thread_rng, RngCore};

#[test]
pub fn test_examples() {
    let cases: Vec<(Vec<u32>, Vec<u32>)> = vec![
        (vec![], vec![]),
        (vec![5], vec![5]),
        (vec![4, 2, 8, 1, 6], vec![1, 2, 4, 6, 8]),
        (
            vec![170, 45, 75, 90, 802, 24, 2, 66],
            vec![2, 24, 45, 66, 75, 90, 170, 802],
        ),
        (vec![5, 5, 5, 2, 2, 1], vec![1, 2, 2, 5, 5, 5]),
        (vec![987, 654, 321], vec![321, 654, 987]),
        (vec![100, 10, 1], vec![1, 10, 100]),
    ];

    for (mut inputs, expected) in cases {
        inputs.digit_shift_sort();
        assert_eq!(inputs, expected);
    }
}

#[test]
pub fn test_reverse_series() {
    let mut inputs: Vec<u32> = (1..=1000).rev().collect();
    let mut inputs_clone = inputs.clone();

    inputs.digit_shift_sort();
    inputs_clone.sort_unstable();

    assert_eq!(inputs, inputs_clone);
    assert_eq!(inputs, (1..=1000).collect::<Vec<u32>>());
}

#[test]
pub fn test_random_permutation_and_order() {
    let mut rng = thread_rng();
    let mut inputs: Vec<u32> = (0..2000).map(|_| rng.next_u32() % 1_000_000).collect();
    let original = inputs.clone();

    inputs.digit_shift_sort();

    assert!(is_sorted_by_key(&inputs, &|v: &u32| v.key()));

    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(inputs, expected);
}

#[test]
pub fn test_idempotent() {
    let mut inputs = gen_inputs(500, 16u64);
    inputs.digit_shift_sort();
    let once = inputs.clone();

    inputs.digit_shift_sort();

    assert_eq!(inputs, once);
}

#[test]
pub fn test_type_limits() {
    let mut inputs = vec![u64::MAX, 0, u64::MAX - 1, 10, u64::MAX];
    digit_shift_sort(&mut inputs);
    assert_eq!(inputs, vec![0, 10, u64::MAX - 1, u64::MAX, u64::MAX]);

    let mut inputs = vec![u128::MAX, 1, u128::MAX / 2, 0];
    let stats = inputs.digit_shift_sort_builder().sort();
    assert_eq!(stats.passes, 39);
    assert_eq!(inputs, vec![0, 1, u128::MAX / 2, u128::MAX]);
}

#[test]
pub fn test_tagged_duplicates_are_stable() {
    let mut inputs = vec![
        Tagged::new(5, 0),
        Tagged::new(5, 1),
        Tagged::new(5, 2),
        Tagged::new(2, 3),
        Tagged::new(2, 4),
        Tagged::new(1, 5),
    ];

    inputs.digit_shift_sort();

    let tags: Vec<usize> = inputs.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![5, 3, 4, 0, 1, 2]);
}

#[test]
pub fn test_each_pass_orders_lower_digits() {
    let mut inputs = gen_tagged_inputs(400, 1_000_000);
    let mut violations = Vec::new();
    let mut observer = |info: &PassInfo, bucket: &[Tagged]| {
        let modulus = info.exp * 10;

        for w in bucket.windows(2) {
            let (a, b) = (w[0].key() % modulus, w[1].key() % modulus);
            if a > b || (a == b && w[0].tag > w[1].tag) {
                violations.push((info.pass, w[0], w[1]));
            }
        }
    };

    inputs
        .digit_shift_sort_builder()
        .with_pass_observer(&mut observer)
        .sort();

    assert!(violations.is_empty(), "{:?}", &violations[..violations.len().min(5)]);
}

#[test]
pub fn test_strategies_agree_after_every_pass() {
    let original = gen_tagged_inputs(300, 100_000);

    let mut shifted = original.clone();
    let mut shifted_states: Vec<(PassInfo, Vec<Tagged>)> = Vec::new();
    let mut record_shifted =
        |info: &PassInfo, bucket: &[Tagged]| shifted_states.push((*info, bucket.to_vec()));
    shifted
        .digit_shift_sort_builder()
        .with_pass_observer(&mut record_shifted)
        .sort();

    let mut counted = original;
    let mut counted_states: Vec<(PassInfo, Vec<Tagged>)> = Vec::new();
    let mut record_counted =
        |info: &PassInfo, bucket: &[Tagged]| counted_states.push((*info, bucket.to_vec()));
    counted
        .digit_shift_sort_builder()
        .with_tuner(&CountingTuner)
        .with_pass_observer(&mut record_counted)
        .sort();

    assert_eq!(shifted_states.len(), counted_states.len());

    for ((s_info, s_state), (c_info, c_state)) in shifted_states.iter().zip(&counted_states) {
        assert_eq!(s_info.exp, c_info.exp);
        assert_eq!(s_info.algorithm, Algorithm::ShiftInsertion);
        assert_eq!(c_info.algorithm, Algorithm::Counting);
        assert_eq!(s_state, c_state);
    }

    assert_eq!(shifted, counted);
}
