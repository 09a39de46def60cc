//! Bubble sort.

/// Sorts `nums` in place by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass bubbles the largest remaining element to the end of the active
/// window, so the window shrinks by one after every pass. Sorting stops as
/// soon as a pass makes no swap.
///
/// Returns the same slice it was given, now sorted.
///
/// # Complexity
///
/// - Already sorted input: O(n), a single pass
/// - Reversed input: O(n²)
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::bubble_sort;
///
/// let mut nums = [5, 3, 1, 4, 2];
/// assert_eq!(bubble_sort(&mut nums), &[1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(nums: &mut [T]) -> &mut [T] {
    let mut end = nums.len();
    let mut changed = true;
    let mut passes = 0_usize;

    while changed && end > 1 {
        changed = false;
        for index in 1..end {
            if nums[index - 1] > nums[index] {
                nums.swap(index - 1, index);
                changed = true;
            }
        }
        end -= 1;
        passes += 1;
    }

    tracing::trace!(len = nums.len(), passes, "bubble sort finished");
    nums
}
