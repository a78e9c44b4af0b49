//! The built-in reference algorithms.
//!
//! Each module pairs a short reference listing with a recording routine
//! that executes the algorithm and narrates every meaningful transition.
//! Listings are deliberately small; step line numbers index into them.

mod binary_search;
mod bubble_sort;
mod lru_cache;
mod merge_sorted;
mod quickselect;
mod two_sum;

pub use binary_search::BinarySearch;
pub use bubble_sort::BubbleSort;
pub use lru_cache::LruCache;
pub use merge_sorted::MergeSorted;
pub use quickselect::Quickselect;
pub use two_sum::TwoSum;
