//! Quick sort with Lomuto partitioning.
//!
//! The pivot is always the last element of the window being sorted. That
//! keeps [`partition`] simple but makes already-sorted input the worst case:
//! every partition peels off a single element and the sort degrades to
//! O(n²) comparisons with recursion depth n.
//!
//! [`quick_sort_iterative`] runs the same partitioning from an explicit stack
//! of pending windows instead of the call stack.

use smallvec::SmallVec;

use crate::error::AlgorithmError;

/// Pending windows kept inline before the stack spills to the heap.
const INLINE_RANGES: usize = 32;

/// Sorts the whole of `nums` in place.
///
/// Equivalent to `quick_sort_range(nums, 0, nums.len() - 1)` but infallible.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::quick_sort;
///
/// let mut nums = [5, 3, 1, 4, 2];
/// assert_eq!(quick_sort(&mut nums), &[1, 2, 3, 4, 5]);
/// ```
pub fn quick_sort<T: Ord>(nums: &mut [T]) -> &mut [T] {
    if let Some(high) = nums.len().checked_sub(1) {
        sort_window(nums, 0, high);
    }
    nums
}

/// Sorts the inclusive window `[low, high]` of `nums` in place and returns
/// the whole slice.
///
/// Elements outside the window are not touched. A window with
/// `low >= high` holds at most one element and is left as is.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidArgument`] if `nums` is non-empty and
/// `high` is not a valid index. An empty slice is returned unchanged
/// whatever the bounds.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::quick_sort_range;
///
/// let mut nums = [9, 5, 3, 1, 0];
/// quick_sort_range(&mut nums, 1, 3).unwrap();
/// assert_eq!(nums, [9, 1, 3, 5, 0]);
///
/// assert!(quick_sort_range(&mut [1, 2], 0, 2).is_err());
/// ```
pub fn quick_sort_range<T: Ord>(
    nums: &mut [T],
    low: usize,
    high: usize,
) -> Result<&mut [T], AlgorithmError> {
    if nums.is_empty() {
        return Ok(nums);
    }
    if high >= nums.len() {
        tracing::debug!(
            function = "quick_sort_range",
            len = nums.len(),
            high,
            "upper bound out of range"
        );
        return Err(AlgorithmError::invalid_argument(
            "quick_sort_range",
            format!("high index {high} is out of range for length {}", nums.len()),
        ));
    }

    sort_window(nums, low, high);
    Ok(nums)
}

fn sort_window<T: Ord>(nums: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pivot = partition(nums, low, high);
    if pivot > low {
        sort_window(nums, low, pivot - 1);
    }
    sort_window(nums, pivot + 1, high);
}

/// Partitions the inclusive window `[low, high]` around `nums[high]`.
///
/// Every element less than or equal to the pivot ends up left of it, every
/// greater element right of it. Returns the pivot's final index.
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high`.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::partition;
///
/// let mut nums = [7, 2, 9, 1, 5];
/// let pivot = partition(&mut nums, 0, 4);
/// assert_eq!(pivot, 2);
/// assert_eq!(nums[pivot], 5);
/// assert!(nums[..pivot].iter().all(|n| *n <= 5));
/// assert!(nums[pivot + 1..].iter().all(|n| *n > 5));
/// ```
pub fn partition<T: Ord>(nums: &mut [T], low: usize, high: usize) -> usize {
    assert!(low <= high, "partition window [{low}, {high}] is empty");

    // `boundary` is one past the last element known to be <= pivot
    let mut boundary = low;
    for scan in low..high {
        if nums[scan] <= nums[high] {
            nums.swap(boundary, scan);
            boundary += 1;
        }
    }
    nums.swap(boundary, high);

    tracing::trace!(low, high, pivot = boundary, "partitioned window");
    boundary
}

/// Sorts `nums` in place without recursion.
///
/// Pending windows are kept on an explicit stack. The larger side of each
/// partition is pushed first so the smaller side is processed next, which
/// bounds the stack at O(log n) windows.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::quick_sort_iterative;
///
/// let mut nums: Vec<u32> = (0..2_000).collect();
/// quick_sort_iterative(&mut nums);
/// assert!(nums.windows(2).all(|pair| pair[0] <= pair[1]));
/// ```
pub fn quick_sort_iterative<T: Ord>(nums: &mut [T]) -> &mut [T] {
    let Some(last) = nums.len().checked_sub(1) else {
        return nums;
    };

    let mut pending: SmallVec<[(usize, usize); INLINE_RANGES]> = SmallVec::new();
    pending.push((0, last));

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(nums, low, high);
        let left = (pivot > low).then(|| (low, pivot - 1));
        let right = (pivot < high).then(|| (pivot + 1, high));

        let (larger, smaller) = match (left, right) {
            (Some(l), Some(r)) if l.1 - l.0 >= r.1 - r.0 => (Some(l), Some(r)),
            (Some(l), Some(r)) => (Some(r), Some(l)),
            (side, None) | (None, side) => (side, None),
        };
        pending.extend(larger);
        pending.extend(smaller);
    }
    nums
}
