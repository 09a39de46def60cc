//! Powerset enumeration.

use super::LARGE_POWERSET_INPUT;

/// Returns every subset of `nums`, from the full set down to the empty one.
///
/// The subsets of the tail are computed first; each of them is then emitted
/// twice, once with the head prepended and once as is. Elements inside a
/// subset keep their input order. For `[1, 2]` the emission order is
/// `[1, 2], [2], [1], []`.
///
/// The result always holds exactly `2^n` subsets, and an empty slice yields
/// one empty subset.
///
/// # Examples
///
/// ```rust
/// use algorithmics::combinatorics::powerset;
///
/// assert_eq!(
///     powerset(&[1, 2]),
///     vec![vec![1, 2], vec![2], vec![1], vec![]]
/// );
/// assert_eq!(powerset::<i32>(&[]), vec![Vec::<i32>::new()]);
/// assert_eq!(powerset(&[1, 2, 3, 4, 5]).len(), 32);
/// ```
pub fn powerset<T: Clone>(nums: &[T]) -> Vec<Vec<T>> {
    if nums.len() > LARGE_POWERSET_INPUT {
        tracing::warn!(
            len = nums.len(),
            "powerset of a large input; output grows as 2^n"
        );
    }
    subsets(nums)
}

fn subsets<T: Clone>(nums: &[T]) -> Vec<Vec<T>> {
    let Some((head, tail)) = nums.split_first() else {
        return vec![Vec::new()];
    };

    let tail_subsets = subsets(tail);
    let mut result = Vec::with_capacity(tail_subsets.len() * 2);
    for subset in tail_subsets {
        let mut with_head = Vec::with_capacity(subset.len() + 1);
        with_head.push(head.clone());
        with_head.extend_from_slice(&subset);

        result.push(with_head);
        result.push(subset);
    }
    result
}
