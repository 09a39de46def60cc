//! Insertion sort.

/// Sorts `nums` in place by growing a sorted prefix one element at a time.
///
/// The element at each index is swapped leftward while its left neighbour is
/// strictly greater, so equal elements never pass each other and the sort is
/// stable.
///
/// # Complexity
///
/// - O(n²) in general
/// - O(n) for small or nearly sorted input
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::insertion_sort;
///
/// let mut nums = vec![5, 3, 1, 4, 2];
/// insertion_sort(&mut nums);
/// assert_eq!(nums, vec![1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(nums: &mut [T]) -> &mut [T] {
    for index in 1..nums.len() {
        let mut position = index;
        while position > 0 && nums[position - 1] > nums[position] {
            nums.swap(position - 1, position);
            position -= 1;
        }
    }
    nums
}
