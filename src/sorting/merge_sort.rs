//! Top-down merge sort.
//!
//! [`merge_sort`] splits its input in half, sorts both halves recursively and
//! combines them with [`merge`]. The input slice is left untouched; the
//! result is a freshly allocated vector.
//!
//! Both functions have `_by` variants taking a comparator, which makes the
//! stability guarantee observable on values that compare equal but are not
//! identical.
//!
//! # Stability
//!
//! ```rust
//! use algorithmics::sorting::merge_sort_by;
//!
//! // Sort by the first component only; the second records input order.
//! let tagged = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
//! let sorted = merge_sort_by(&tagged, |left, right| left.0.cmp(&right.0));
//! assert_eq!(sorted, vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
//! ```

use std::cmp::Ordering;

/// Returns a sorted copy of `nums`.
///
/// # Complexity
///
/// O(n log n) time and O(n) extra memory. Slower than the in-place sorts on
/// small inputs, so it pays off on large ones.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::merge_sort;
///
/// let nums = [5, 3, 1, 4, 2];
/// assert_eq!(merge_sort(&nums), vec![1, 2, 3, 4, 5]);
/// assert_eq!(nums, [5, 3, 1, 4, 2]); // input unchanged
/// ```
pub fn merge_sort<T: Ord + Clone>(nums: &[T]) -> Vec<T> {
    merge_sort_by(nums, T::cmp)
}

/// Returns a copy of `nums` sorted with the comparator `compare`.
///
/// The sort is stable: elements for which `compare` returns
/// [`Ordering::Equal`] keep their relative input order.
pub fn merge_sort_by<T, F>(nums: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(nums, &mut compare)
}

fn sort_recursive<T, F>(nums: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if nums.len() < 2 {
        return nums.to_vec();
    }

    let median = nums.len() / 2;
    let (left, right) = nums.split_at(median);
    let sorted_left = sort_recursive(left, compare);
    let sorted_right = sort_recursive(right, compare);
    merge_with(&sorted_left, &sorted_right, compare)
}

/// Merges two sorted slices into one sorted vector.
///
/// The lesser front element is taken at every step; on ties the element from
/// `left` goes first. Whatever remains of the longer side is appended at the
/// end.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::merge;
///
/// assert_eq!(merge(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
/// assert_eq!(merge(&[], &[1, 2]), vec![1, 2]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, T::cmp)
}

/// Merges two slices sorted by `compare` into one vector sorted by `compare`.
///
/// Elements of `left` precede equal elements of `right`.
pub fn merge_by<T, F>(left: &[T], right: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_with(left, right, &mut compare)
}

fn merge_with<T, F>(left: &[T], right: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) == Ordering::Greater {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_is_returned_unchanged() {
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = [(1, "left")];
        let right = [(1, "right")];
        let merged = merge_by(&left, &right, |a, b| a.0.cmp(&b.0));
        assert_eq!(merged, vec![(1, "left"), (1, "right")]);
    }
}
