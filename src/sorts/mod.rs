mod counting_sort;
mod shift_insertion_sort;

pub use counting_sort::*;
pub use shift_insertion_sort::*;
