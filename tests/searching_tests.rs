//! Unit tests for the searching module.

#![cfg(feature = "searching")]

use algorithmics::searching::{binary_search, deduplicate};
use rstest::rstest;

// =============================================================================
// deduplicate
// =============================================================================

#[rstest]
#[case(vec![1, 2, 2, 3, 1], vec![1, 2, 3])]
#[case(vec![], vec![])]
#[case(vec![9], vec![9])]
#[case(vec![4, 4, 4, 4], vec![4])]
#[case(vec![5, 4, 3, 2, 1], vec![5, 4, 3, 2, 1])]
#[case(vec![-1, 0, -1, 0, 1], vec![-1, 0, 1])]
fn test_deduplicate_keeps_first_occurrences(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(deduplicate(&input), expected);
}

#[rstest]
fn test_deduplicate_does_not_modify_input() {
    let input = vec![3, 3, 1];
    let _ = deduplicate(&input);
    assert_eq!(input, vec![3, 3, 1]);
}

#[rstest]
fn test_deduplicate_works_on_strings() {
    let names = ["ada", "grace", "ada", "linus", "grace"];
    assert_eq!(deduplicate(&names), vec!["ada", "grace", "linus"]);
}

// =============================================================================
// binary_search
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(4, false)]
#[case(1, true)]
#[case(9, true)]
#[case(0, false)]
#[case(10, false)]
fn test_binary_search_membership(#[case] target: i32, #[case] expected: bool) {
    let sorted = [1, 3, 5, 7, 9];
    assert_eq!(binary_search(&target, &sorted), Ok(expected));
}

#[rstest]
fn test_binary_search_empty_is_invalid_argument() {
    let empty: [i32; 0] = [];
    let error = binary_search(&1, &empty).unwrap_err();

    assert!(error.is_invalid_argument());
    assert_eq!(error.function(), "binary_search");
}

#[rstest]
fn test_binary_search_with_duplicates() {
    let sorted = [1, 2, 2, 2, 3];
    assert_eq!(binary_search(&2, &sorted), Ok(true));
    assert_eq!(binary_search(&4, &sorted), Ok(false));
}

#[rstest]
fn test_binary_search_extreme_values() {
    let sorted = [i64::MIN, -1, 0, 1, i64::MAX];
    for value in sorted {
        assert_eq!(binary_search(&value, &sorted), Ok(true));
    }
    assert_eq!(binary_search(&2, &sorted), Ok(false));
}
