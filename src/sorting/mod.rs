//! Ordering algorithms.
//!
//! | Function                 | In place | Stable | Time (average / worst) |
//! |--------------------------|----------|--------|------------------------|
//! | [`bubble_sort`]          | yes      | yes    | O(n²) / O(n²)          |
//! | [`insertion_sort`]       | yes      | yes    | O(n²) / O(n²)          |
//! | [`selection_sort`]       | yes      | no     | O(n²) / O(n²)          |
//! | [`merge_sort`]           | no       | yes    | O(n log n) / O(n log n) |
//! | [`quick_sort`]           | yes      | no     | O(n log n) / O(n²)     |
//! | [`quick_sort_iterative`] | yes      | no     | O(n log n) / O(n²)     |
//!
//! The in-place sorts take exclusive access to the caller's slice and hand
//! the same slice back, so calls can be chained or asserted on directly:
//!
//! ```rust
//! use algorithmics::sorting::{bubble_sort, insertion_sort, quick_sort, selection_sort};
//!
//! let expected = [1, 2, 3, 4, 5];
//! assert_eq!(bubble_sort(&mut [5, 3, 1, 4, 2]), &expected);
//! assert_eq!(insertion_sort(&mut [5, 3, 1, 4, 2]), &expected);
//! assert_eq!(quick_sort(&mut [5, 3, 1, 4, 2]), &expected);
//! assert_eq!(selection_sort(&mut [5, 3, 1, 4, 2]), &expected);
//! ```
//!
//! [`merge_sort`] leaves its input alone and returns a new vector:
//!
//! ```rust
//! use algorithmics::sorting::merge_sort;
//!
//! assert_eq!(merge_sort(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
//! ```

mod algorithm;
mod bubble_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod selection_sort;

pub use algorithm::SortAlgorithm;
pub use bubble_sort::bubble_sort;
pub use insertion_sort::insertion_sort;
pub use merge_sort::{merge, merge_by, merge_sort, merge_sort_by};
pub use quick_sort::{partition, quick_sort, quick_sort_iterative, quick_sort_range};
pub use selection_sort::selection_sort;
