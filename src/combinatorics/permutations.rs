//! Permutation enumeration.

use super::LARGE_PERMUTATION_INPUT;

/// Returns every ordering of `nums`.
///
/// Uses Heap's algorithm on a working copy: each permutation is derived
/// from the previous one by a single swap. For distinct input the `n!`
/// results are all distinct. An empty slice has exactly one (empty)
/// ordering.
///
/// # Examples
///
/// ```rust
/// use algorithmics::combinatorics::permutations;
///
/// let orderings = permutations(&['a', 'b', 'c']);
/// assert_eq!(orderings.len(), 6);
/// assert_eq!(orderings[0], vec!['a', 'b', 'c']);
/// assert!(orderings.contains(&vec!['c', 'b', 'a']));
/// ```
pub fn permutations<T: Clone>(nums: &[T]) -> Vec<Vec<T>> {
    if nums.len() > LARGE_PERMUTATION_INPUT {
        tracing::warn!(
            len = nums.len(),
            "permutations of a large input; output grows as n!"
        );
    }
    if nums.is_empty() {
        return vec![Vec::new()];
    }

    let mut working = nums.to_vec();
    let mut result = Vec::new();
    heap_permute(&mut working, nums.len(), &mut result);
    result
}

/// Emits every ordering of the first `k` elements of `working`, leaving the
/// rest fixed.
fn heap_permute<T: Clone>(working: &mut [T], k: usize, result: &mut Vec<Vec<T>>) {
    if k <= 1 {
        result.push(working.to_vec());
        return;
    }

    for index in 0..k - 1 {
        heap_permute(working, k - 1, result);
        if k % 2 == 0 {
            working.swap(index, k - 1);
        } else {
            working.swap(0, k - 1);
        }
    }
    heap_permute(working, k - 1, result);
}
