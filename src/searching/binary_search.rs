//! Interval-halving membership test.

use crate::error::AlgorithmError;

/// Returns whether `target` is present in `nums`.
///
/// `nums` must be sorted in ascending order; sortedness is the caller's
/// responsibility and is not checked. On unsorted input the answer is
/// unspecified (but the call still terminates).
///
/// The search keeps an inclusive `[start, end]` window, compares the target
/// against the median element and discards the half that cannot contain it.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidArgument`] if `nums` is empty: an empty
/// slice is not a valid search space.
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Examples
///
/// ```rust
/// use algorithmics::searching::binary_search;
///
/// let sorted = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&5, &sorted), Ok(true));
/// assert_eq!(binary_search(&4, &sorted), Ok(false));
///
/// let empty: [i32; 0] = [];
/// assert!(binary_search(&1, &empty).is_err());
/// ```
pub fn binary_search<T: Ord>(target: &T, nums: &[T]) -> Result<bool, AlgorithmError> {
    if nums.is_empty() {
        tracing::debug!(function = "binary_search", "rejected empty search space");
        return Err(AlgorithmError::invalid_argument(
            "binary_search",
            "nums can't be empty",
        ));
    }

    let (mut start, mut end) = (0_usize, nums.len() - 1);
    while start <= end {
        let median = start + (end - start) / 2;
        match nums[median].cmp(target) {
            std::cmp::Ordering::Equal => return Ok(true),
            std::cmp::Ordering::Greater => {
                // Nothing left of index 0
                if median == 0 {
                    return Ok(false);
                }
                end = median - 1;
            }
            std::cmp::Ordering::Less => start = median + 1,
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_below_first_element_does_not_underflow() {
        assert_eq!(binary_search(&0, &[1, 2, 3]), Ok(false));
    }

    #[test]
    fn single_element() {
        assert_eq!(binary_search(&1, &[1]), Ok(true));
        assert_eq!(binary_search(&2, &[1]), Ok(false));
    }
}
