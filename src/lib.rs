//! # digit-shift-sort
//!
//! digit-shift-sort is a stable LSD radix sort for non-negative integers. Each decimal digit,
//! from the least significant upwards, is sorted with an insertion-style shifting pass rather
//! than a counting pass, so the default sort needs no buffers beyond the input itself.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.digit_shift_sort()`. If you have a custom type to sort,
//! implement `DigitKey` for it.
//!
//! ```
//! use digit_shift_sort::DigitShiftSort;
//!
//! let mut values = vec![100u64, 10, 1];
//! values.digit_shift_sort();
//!
//! assert_eq!(values, [1, 10, 100]);
//! ```
//!
//! ## Default Implementations
//!
//! `DigitKey` is implemented out-of-the-box for:
//!
//!  * `u8`
//!  * `u16`
//!  * `u32`
//!  * `u64`
//!  * `u128`
//!  * `usize`
//!
//! Signed integers are deliberately left out because their digits do not order negative values.
//! Use `try_digit_shift_sort` for signed input, which rejects anything below zero.
//!
//! ## Cost
//!
//! One pass runs per decimal digit of the largest value. A shift-insertion pass is O(n²) in the
//! worst case and O(n) when the input is already ordered on that digit. For larger inputs,
//! `digit_shift_sort_builder().with_throughput_tuner()` switches to linear counting passes that
//! allocate one temporary buffer. Both produce the same arrangement after every pass.
//!
//! ## Logging
//!
//! Pass-level detail is emitted through the `log` facade: one `debug` record per sort and a
//! `trace` record per digit pass.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#[cfg(test)]
mod tests;

pub mod demo;
mod digit_key;
mod digit_key_impl;
mod digit_shift_sort;
mod digit_shift_sort_builder;
pub mod display;
mod error;
mod signed_key;
mod sorter;
mod sorts;
pub mod tuner;
pub mod tuners;
mod utils;
mod verify;

#[cfg(test)]
pub(crate) use utils::test_utils;

pub use digit_key::DigitKey;
pub use digit_shift_sort::{digit_shift_sort, digit_shift_sort_by_key, DigitShiftSort};
pub use digit_shift_sort_builder::DigitShiftSortBuilder;
pub use error::{Error, Result};
pub use signed_key::{check_non_negative, try_digit_shift_sort, TryDigitKey};
pub use sorter::{PassInfo, PassObserver, SortStats};
pub use utils::{digit_passes, get_max_key, is_sorted_by_key};
pub use verify::verify_against_reference;
