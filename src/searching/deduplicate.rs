//! Order-preserving deduplication.

use std::hash::Hash;

#[cfg(feature = "fxhash")]
type MembershipSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MembershipSet<T> = ahash::AHashSet<T>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MembershipSet<T> = std::collections::HashSet<T>;

/// Removes repeated values, keeping each value at its first position.
///
/// Every distinct value of `nums` appears exactly once in the result, in the
/// order it was first seen. An empty slice yields an empty vector.
///
/// # Complexity
///
/// O(n) expected time: membership is checked against a hash set rather than
/// by comparing every pair of elements.
///
/// # Examples
///
/// ```rust
/// use algorithmics::searching::deduplicate;
///
/// assert_eq!(deduplicate(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(deduplicate::<i32>(&[]), Vec::<i32>::new());
///
/// // Idempotent
/// let once = deduplicate(&["b", "a", "b"]);
/// assert_eq!(deduplicate(&once), once);
/// ```
pub fn deduplicate<T>(nums: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if nums.is_empty() {
        return Vec::new();
    }

    let mut seen = MembershipSet::default();
    seen.reserve(nums.len());

    // `insert` returns false for values already emitted
    nums.iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_position() {
        assert_eq!(deduplicate(&[3, 1, 3, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn all_equal_collapses_to_single_value() {
        assert_eq!(deduplicate(&[7; 16]), vec![7]);
    }
}
