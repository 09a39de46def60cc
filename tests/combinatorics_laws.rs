//! Property-based tests for the combinatorics module.
//!
//! - **Powerset**: exactly 2^n subsets, all distinct for distinct input,
//!   each one an order-preserving subsequence of the input
//! - **Permutations**: exactly n! orderings, each a rearrangement of the input
//! - **Subset sum**: agrees with an oracle built from the powerset
//! - **TSP**: the verifier accepts what the search claims exists

#![cfg(feature = "combinatorics")]

use std::collections::BTreeSet;

use algorithmics::combinatorics::{permutations, powerset, subset_sum, tsp, verify_tsp};
use proptest::prelude::*;

fn distinct_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-50i32..50, 0..=max_len)
        .prop_map(|set| set.into_iter().collect())
}

fn is_subsequence(candidate: &[i32], of: &[i32]) -> bool {
    let mut remaining = of.iter();
    candidate.iter().all(|value| remaining.any(|other| other == value))
}

// =============================================================================
// Powerset
// =============================================================================

proptest! {
    /// |powerset(S)| == 2^|S|
    #[test]
    fn prop_powerset_size(input in prop::collection::vec(any::<i32>(), 0..12)) {
        prop_assert_eq!(powerset(&input).len(), 1usize << input.len());
    }
}

proptest! {
    /// Distinct input gives distinct subsets, each a subsequence of the input
    #[test]
    fn prop_powerset_subsets_distinct(input in distinct_values(10)) {
        let subsets = powerset(&input);
        let unique: BTreeSet<Vec<i32>> = subsets.iter().cloned().collect();

        prop_assert_eq!(unique.len(), subsets.len());
        for subset in &subsets {
            prop_assert!(is_subsequence(subset, &input));
        }
    }
}

// =============================================================================
// Permutations
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    /// n! distinct orderings of distinct input, each a rearrangement of it
    #[test]
    fn prop_permutations_complete(input in distinct_values(6)) {
        let orderings = permutations(&input);
        let expected_len: usize = (1..=input.len()).product();
        prop_assert_eq!(orderings.len(), expected_len);

        let unique: BTreeSet<Vec<i32>> = orderings.iter().cloned().collect();
        prop_assert_eq!(unique.len(), expected_len);

        let mut sorted_input = input.clone();
        sorted_input.sort_unstable();
        for ordering in orderings {
            let mut sorted = ordering;
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &sorted_input);
        }
    }
}

// =============================================================================
// Subset Sum
// =============================================================================

proptest! {
    /// subset_sum agrees with summing every subset of the powerset
    #[test]
    fn prop_subset_sum_matches_powerset_oracle(
        nums in prop::collection::vec(0u64..40, 0..10),
        target in 0u64..120,
    ) {
        let oracle = powerset(&nums)
            .iter()
            .any(|subset| subset.iter().sum::<u64>() == target);

        prop_assert_eq!(subset_sum(&nums, target), oracle);
    }
}

// =============================================================================
// TSP
// =============================================================================

fn square_matrix(max_size: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    (1..=max_size).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(0u64..50, size), size)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    /// tsp(bound) is true iff some tour passes verify_tsp(bound)
    #[test]
    fn prop_tsp_agrees_with_verifier(distances in square_matrix(5), bound in 0u64..150) {
        let cities: Vec<usize> = (0..distances.len()).collect();
        let any_verified = permutations(&cities)
            .iter()
            .any(|tour| verify_tsp(&distances, bound, tour).unwrap());

        prop_assert_eq!(tsp(&cities, &distances, bound).unwrap(), any_verified);
    }
}
