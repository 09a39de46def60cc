//! Selection sort.

/// Sorts `nums` in place by repeatedly selecting the smallest remaining
/// element.
///
/// For every index `i` the suffix `[i + 1, n)` is scanned for its minimum,
/// which is then swapped into position `i`. The swap happens even when the
/// minimum is already in place.
///
/// # Complexity
///
/// O(n²) comparisons but at most n swaps.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::selection_sort;
///
/// let mut nums = [5, 3, 1, 4, 2];
/// assert_eq!(selection_sort(&mut nums), &[1, 2, 3, 4, 5]);
/// ```
pub fn selection_sort<T: Ord>(nums: &mut [T]) -> &mut [T] {
    let length = nums.len();
    for index in 0..length {
        let mut smallest = index;
        for candidate in (index + 1)..length {
            if nums[candidate] < nums[smallest] {
                smallest = candidate;
            }
        }
        nums.swap(index, smallest);
    }
    nums
}
