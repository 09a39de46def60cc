//! Runtime selection between the sorting algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::AlgorithmError;

use super::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

/// One of the sorting algorithms provided by this module.
///
/// Lets callers choose an algorithm at runtime (from a name, a config value
/// or a test matrix) and run it over a slice.
///
/// # Examples
///
/// ```rust
/// use algorithmics::sorting::SortAlgorithm;
///
/// for algorithm in SortAlgorithm::ALL {
///     let mut nums = [5, 3, 1, 4, 2];
///     algorithm.sort(&mut nums);
///     assert_eq!(nums, [1, 2, 3, 4, 5], "{algorithm} failed");
/// }
///
/// let algorithm: SortAlgorithm = "Merge".parse().unwrap();
/// assert_eq!(algorithm, SortAlgorithm::Merge);
/// assert!(algorithm.is_stable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SortAlgorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`merge_sort`]
    Merge,
    /// [`insertion_sort`]
    Insertion,
    /// [`quick_sort`]
    Quick,
    /// [`selection_sort`]
    Selection,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Merge,
        Self::Insertion,
        Self::Quick,
        Self::Selection,
    ];

    /// The lowercase name of the algorithm, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Merge => "merge",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Selection => "selection",
        }
    }

    /// Returns `true` if equal elements keep their relative order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Merge | Self::Insertion)
    }

    /// Returns `true` if the algorithm sorts without allocating a copy.
    pub const fn is_in_place(self) -> bool {
        !matches!(self, Self::Merge)
    }

    /// Sorts `nums` in place with this algorithm and returns it.
    ///
    /// [`SortAlgorithm::Merge`] sorts into a new vector and copies the
    /// result back into `nums`.
    pub fn sort<T: Ord + Clone>(self, nums: &mut [T]) -> &mut [T] {
        match self {
            Self::Bubble => bubble_sort(nums),
            Self::Merge => {
                let sorted = merge_sort(nums);
                nums.clone_from_slice(&sorted);
                nums
            }
            Self::Insertion => insertion_sort(nums),
            Self::Quick => quick_sort(nums),
            Self::Selection => selection_sort(nums),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgorithmError;

    /// Parses a case-insensitive name such as `"quick"` or `"quick_sort"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let name = normalized.strip_suffix("_sort").unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| {
                AlgorithmError::invalid_argument(
                    "SortAlgorithm::from_str",
                    format!("unknown sort algorithm {value:?}"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffixed_names() {
        assert_eq!("selection_sort".parse(), Ok(SortAlgorithm::Selection));
        assert_eq!(" QUICK ".parse(), Ok(SortAlgorithm::Quick));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }
}
