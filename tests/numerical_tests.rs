//! Tests for the numerical module.

#![cfg(feature = "numerical")]

use algorithmics::numerical::{fibonacci, num_guesses, prime_factors};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// fibonacci
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 1)]
#[case(3, 2)]
#[case(10, 55)]
#[case(20, 6765)]
#[case(50, 12_586_269_025)]
fn test_fibonacci_known_values(#[case] n: i64, #[case] expected: u128) {
    assert_eq!(fibonacci(n), Ok(expected));
}

#[rstest]
#[case(-1)]
#[case(-42)]
#[case(i64::MIN)]
fn test_fibonacci_negative_is_invalid_argument(#[case] n: i64) {
    let error = fibonacci(n).unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.function(), "fibonacci");
}

#[rstest]
fn test_fibonacci_overflow_is_reported() {
    assert!(fibonacci(186).is_ok());
    assert!(fibonacci(187).unwrap_err().is_overflow());
    assert!(fibonacci(i64::MAX).unwrap_err().is_overflow());
}

proptest! {
    /// Recurrence: F(n) = F(n - 1) + F(n - 2) for n >= 2
    #[test]
    fn prop_fibonacci_recurrence(n in 2i64..=186) {
        let current = fibonacci(n).unwrap();
        let parent = fibonacci(n - 1).unwrap();
        let grandparent = fibonacci(n - 2).unwrap();

        prop_assert_eq!(current, parent + grandparent);
    }
}

// =============================================================================
// prime_factors
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(1, vec![])]
#[case(2, vec![2])]
#[case(12, vec![2, 2, 3])]
#[case(97, vec![97])]
#[case(1_001, vec![7, 11, 13])]
#[case(1_024, vec![2; 10])]
#[case(600_851_475_143, vec![71, 839, 1_471, 6_857])]
fn test_prime_factors_known_values(#[case] n: u64, #[case] expected: Vec<u64>) {
    assert_eq!(prime_factors(n), expected);
}

#[rstest]
fn test_prime_factors_of_large_prime() {
    // Largest prime below 2^32
    assert_eq!(prime_factors(4_294_967_291), vec![4_294_967_291]);
}

proptest! {
    /// The factors multiply back to n, ascend, and are all prime
    #[test]
    fn prop_prime_factors_product(n in 2u64..1_000_000) {
        let factors = prime_factors(n);

        prop_assert_eq!(factors.iter().product::<u64>(), n);
        prop_assert!(factors.windows(2).all(|pair| pair[0] <= pair[1]));
        for factor in &factors {
            prop_assert_eq!(prime_factors(*factor), vec![*factor]);
        }
    }
}

// =============================================================================
// num_guesses
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(1, 26)]
#[case(2, 702)]
#[case(3, 18_278)]
#[case(4, 475_254)]
fn test_num_guesses_known_values(#[case] length: u32, #[case] expected: u128) {
    assert_eq!(num_guesses(length), Ok(expected));
}

#[rstest]
fn test_num_guesses_overflow() {
    assert!(num_guesses(27).is_ok());
    let error = num_guesses(28).unwrap_err();
    assert!(error.is_overflow());
    assert_eq!(error.function(), "num_guesses");
}
