/// Maps a value to the non-negative integer it is sorted by.
///
/// The key is read once per comparison, so it should be cheap to compute. Values sort ascending
/// by their key, and values with equal keys keep their original relative order.
///
/// ```
/// use digit_shift_sort::{DigitKey, DigitShiftSort};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Order {
///     id: u32,
///     quantity: u16,
/// }
///
/// impl DigitKey for Order {
///     #[inline]
///     fn key(&self) -> u128 {
///         self.quantity as u128
///     }
/// }
///
/// let mut orders = vec![
///     Order { id: 1, quantity: 30 },
///     Order { id: 2, quantity: 7 },
///     Order { id: 3, quantity: 30 },
/// ];
/// orders.digit_shift_sort();
///
/// let ids: Vec<u32> = orders.iter().map(|o| o.id).collect();
/// assert_eq!(ids, vec![2, 1, 3]);
/// ```
pub trait DigitKey {
    fn key(&self) -> u128;

    /// Decimal digit of the key at place value `exp` (1, 10, 100, ...).
    #[inline]
    fn digit(&self, exp: u128) -> u8 {
        ((self.key() / exp) % 10) as u8
    }
}
