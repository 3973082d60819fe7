//! Signed integers can only be digit shift sorted once they are known to be non-negative.
//!
//! Digit extraction by division and remainder does not order negative values, so rather than
//! produce an arbitrary arrangement the whole input is checked up front and rejected with
//! `Error::NegativeValue` if anything is below zero.

use crate::error::{Error, Result};
use crate::sorter::Sorter;
use crate::tuners::StandardTuner;

pub trait TryDigitKey: Copy {
    /// The key for a non-negative value, or `None` for a negative one.
    fn try_key(&self) -> Option<u128>;

    fn to_i128(&self) -> i128;
}

macro_rules! impl_try_digit_key {
    ($($t:ty),*) => {
        $(
            impl TryDigitKey for $t {
                #[inline]
                fn try_key(&self) -> Option<u128> {
                    u128::try_from(*self).ok()
                }

                #[inline]
                fn to_i128(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

impl_try_digit_key!(i8, i16, i32, i64, i128, isize);

/// Returns the first negative value as an error.
pub fn check_non_negative<T>(bucket: &[T]) -> Result<()>
where
    T: TryDigitKey,
{
    match bucket.iter().position(|v| v.try_key().is_none()) {
        Some(index) => Err(Error::NegativeValue {
            index,
            value: bucket[index].to_i128(),
        }),
        None => Ok(()),
    }
}

/// Sorts a slice of signed integers, failing without touching it if any value is negative.
///
/// ```
/// use digit_shift_sort::{try_digit_shift_sort, Error};
///
/// let mut values = [170i64, 45, 75, 90];
/// assert_eq!(try_digit_shift_sort(&mut values).unwrap(), [45, 75, 90, 170]);
///
/// let mut values = [3i32, -1, 2];
/// assert!(matches!(
///     try_digit_shift_sort(&mut values),
///     Err(Error::NegativeValue { index: 1, value: -1 })
/// ));
/// ```
pub fn try_digit_shift_sort<T>(bucket: &mut [T]) -> Result<&mut [T]>
where
    T: TryDigitKey,
{
    check_non_negative(bucket)?;

    Sorter::new(&StandardTuner, None).sort(bucket, &|v: &T| v.try_key().unwrap_or(0));

    Ok(bucket)
}
