//! `counting_pass` is the classic out-of-place counting sort over one decimal digit.
//!
//! Digits are counted into ten buckets, the counts are turned into starting offsets, then every
//! element is scattered into a temporary buffer in input order before being copied back. Walking
//! the input front to back keeps the pass stable, so it yields exactly the same arrangement as
//! `shift_insertion_pass` for the same digit.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * stable
//!  * single-threaded
//!  * O(n) per pass

use crate::utils::*;

/// Returns the number of elements that ended up at a different index.
///
/// `tmp_bucket` must be the same length as `bucket`. Its contents are overwritten.
#[inline]
pub fn counting_pass<T, K>(bucket: &mut [T], tmp_bucket: &mut [T], exp: u128, key: &K) -> usize
where
    T: Copy,
    K: Fn(&T) -> u128,
{
    debug_assert_eq!(bucket.len(), tmp_bucket.len());

    if bucket.len() < 2 {
        return 0;
    }

    let counts = get_digit_counts(bucket, exp, key);
    let mut prefix_sums = get_prefix_sums(&counts);
    let mut moves = 0;

    for (i, val) in bucket.iter().enumerate() {
        let digit = digit_of(key(val), exp);
        let write_loc = prefix_sums[digit];

        tmp_bucket[write_loc] = *val;
        prefix_sums[digit] += 1;

        if write_loc != i {
            moves += 1;
        }
    }

    bucket.copy_from_slice(tmp_bucket);

    moves
}
