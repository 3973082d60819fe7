use crate::error::{Error, Result};

/// Checks `sorted` against the standard library's stable sort of `original`.
///
/// Only keys are compared, so the first differing key is reported. Equal-keyed records carrying
/// different payloads are not told apart here.
pub fn verify_against_reference<T, K>(original: &[T], sorted: &[T], key: K) -> Result<()>
where
    T: Clone,
    K: Fn(&T) -> u128,
{
    if original.len() != sorted.len() {
        return Err(Error::LengthMismatch {
            expected: original.len(),
            actual: sorted.len(),
        });
    }

    let mut expected = original.to_vec();
    expected.sort_by_key(&key);

    match expected
        .iter()
        .zip(sorted)
        .position(|(e, a)| key(e) != key(a))
    {
        Some(index) => Err(Error::Mismatch {
            index,
            expected: key(&expected[index]),
            actual: key(&sorted[index]),
        }),
        None => Ok(()),
    }
}
