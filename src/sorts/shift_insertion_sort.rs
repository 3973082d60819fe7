//! `shift_insertion_pass` redistributes a bucket by a single decimal digit using an
//! insertion-sort style walk rather than a counting pass.
//!
//! Each element is lifted out, then every earlier element whose digit at `exp` is strictly
//! greater is shifted one slot to the right. The lifted element drops into the gap. An equal
//! digit stops the walk, which is what keeps the pass stable and lets a sequence of passes from
//! the least significant digit upwards produce a fully sorted bucket.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * stable
//!  * single-threaded
//!  * O(n²) worst case per pass, O(n) when the bucket is already ordered by this digit

use crate::utils::digit_of;

/// Returns the number of element relocations performed.
#[inline]
pub fn shift_insertion_pass<T, K>(bucket: &mut [T], exp: u128, key: &K) -> usize
where
    T: Copy,
    K: Fn(&T) -> u128,
{
    let mut moves = 0;

    for i in 1..bucket.len() {
        let current = bucket[i];
        let current_digit = digit_of(key(&current), exp);

        let mut j = i;
        while j > 0 && digit_of(key(&bucket[j - 1]), exp) > current_digit {
            bucket[j] = bucket[j - 1];
            j -= 1;
            moves += 1;
        }

        if j != i {
            bucket[j] = current;
            moves += 1;
        }
    }

    moves
}
