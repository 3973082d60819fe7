use crate::digit_shift_sort_builder::DigitShiftSortBuilder;
use crate::DigitKey;

pub trait DigitShiftSort<T> {
    /// digit_shift_sort runs a stable LSD radix sort based upon the `DigitKey` implementation
    /// of `T` in your `Vec<T>` or `[T]`, and hands the same collection back.
    ///
    /// ```
    /// use digit_shift_sort::DigitShiftSort;
    ///
    /// let mut values = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
    /// values.digit_shift_sort();
    ///
    /// assert_eq!(values, [2, 24, 45, 66, 75, 90, 170, 802]);
    /// ```
    fn digit_shift_sort(&mut self) -> &mut Self;

    fn digit_shift_sort_builder(&'_ mut self) -> DigitShiftSortBuilder<'_, T>;
}

impl<T> DigitShiftSort<T> for Vec<T>
where
    T: DigitKey + Copy,
{
    fn digit_shift_sort(&mut self) -> &mut Self {
        self.digit_shift_sort_builder().sort();

        self
    }

    fn digit_shift_sort_builder(&'_ mut self) -> DigitShiftSortBuilder<'_, T> {
        DigitShiftSortBuilder::new(self)
    }
}

impl<T> DigitShiftSort<T> for [T]
where
    T: DigitKey + Copy,
{
    fn digit_shift_sort(&mut self) -> &mut Self {
        self.digit_shift_sort_builder().sort();

        self
    }

    fn digit_shift_sort_builder(&'_ mut self) -> DigitShiftSortBuilder<'_, T> {
        DigitShiftSortBuilder::new(self)
    }
}

/// Sorts `bucket` ascending in place and returns it.
///
/// ```
/// let mut values = [5u8, 5, 5, 2, 2, 1];
///
/// assert_eq!(digit_shift_sort::digit_shift_sort(&mut values), [1, 2, 2, 5, 5, 5]);
/// ```
pub fn digit_shift_sort<T>(bucket: &mut [T]) -> &mut [T]
where
    T: DigitKey + Copy,
{
    DigitShiftSortBuilder::new(&mut *bucket).sort();

    bucket
}

/// Sorts `bucket` ascending by `key`, keeping values with equal keys in their original order.
pub fn digit_shift_sort_by_key<T, K>(bucket: &mut [T], key: K) -> &mut [T]
where
    T: Copy,
    K: Fn(&T) -> u128,
{
    DigitShiftSortBuilder::new(&mut *bucket).sort_by_key(key);

    bucket
}
