/// Decimal digit of `key` at place value `exp`, as a bucket index.
#[inline]
pub fn digit_of(key: u128, exp: u128) -> usize {
    ((key / exp) % 10) as usize
}

/// Largest key in the bucket, or 0 when the bucket is empty.
#[inline]
pub fn get_max_key<T, K>(bucket: &[T], key: &K) -> u128
where
    K: Fn(&T) -> u128,
{
    bucket.iter().fold(0, |max, v| max.max(key(v)))
}

#[inline]
pub fn get_digit_counts<T, K>(bucket: &[T], exp: u128, key: &K) -> [usize; 10]
where
    K: Fn(&T) -> u128,
{
    let mut counts = [0usize; 10];

    for v in bucket {
        counts[digit_of(key(v), exp)] += 1;
    }

    counts
}

#[inline]
pub fn get_prefix_sums(counts: &[usize; 10]) -> [usize; 10] {
    let mut sums = [0usize; 10];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// Iterator over the place values 1, 10, 100, ... that hold a digit of `max`.
///
/// Stops early instead of overflowing, so every digit of `u128::MAX` is visited.
#[derive(Debug, Clone)]
pub struct PlaceValues {
    max: u128,
    next: Option<u128>,
}

impl Iterator for PlaceValues {
    type Item = u128;

    #[inline]
    fn next(&mut self) -> Option<u128> {
        let exp = self.next?;

        if self.max / exp == 0 {
            self.next = None;
            return None;
        }

        self.next = exp.checked_mul(10);
        Some(exp)
    }
}

#[inline]
pub fn place_values(max: u128) -> PlaceValues {
    PlaceValues { max, next: Some(1) }
}

/// Number of digit passes needed for a bucket whose largest key is `max`.
#[inline]
pub fn digit_passes(max: u128) -> usize {
    place_values(max).count()
}

#[inline]
pub fn is_sorted_by_key<T, K>(bucket: &[T], key: &K) -> bool
where
    K: Fn(&T) -> u128,
{
    bucket.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}
