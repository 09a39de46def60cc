//! Subset sum decision problem.

/// Returns whether some subset of `nums` adds up to exactly `target`.
///
/// Works backwards from the last element, branching on whether each element
/// is part of the subset. Elements larger than what is left of the target
/// only take the "excluded" branch. The empty subset sums to 0, so a
/// `target` of 0 is always reachable.
///
/// # Complexity
///
/// O(2^n) in the worst case.
///
/// # Examples
///
/// ```rust
/// use algorithmics::combinatorics::subset_sum;
///
/// assert!(subset_sum(&[3, 34, 4, 12, 5, 2], 9));
/// assert!(!subset_sum(&[3, 34, 4, 12, 5, 2], 30));
/// assert!(subset_sum(&[], 0));
/// ```
pub fn subset_sum(nums: &[u64], target: u64) -> bool {
    if target == 0 {
        return true;
    }
    let Some((last, rest)) = nums.split_last() else {
        return false;
    };

    if *last > target {
        return subset_sum(rest, target);
    }
    subset_sum(rest, target) || subset_sum(rest, target - last)
}
