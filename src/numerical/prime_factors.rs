//! Prime factorisation.

/// Returns the prime factors of `n` in ascending order, with multiplicity.
///
/// Divides out every factor of 2, then tries odd candidates up to `√n`.
/// Whatever is left above 2 after that is itself prime. `0` and `1` have no
/// prime factors and yield an empty vector.
///
/// # Complexity
///
/// O(√n) divisions in the worst case (when `n` is prime).
///
/// # Examples
///
/// ```rust
/// use algorithmics::numerical::prime_factors;
///
/// assert_eq!(prime_factors(60), vec![2, 2, 3, 5]);
/// assert_eq!(prime_factors(97), vec![97]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut remaining = n;
    while remaining % 2 == 0 {
        factors.push(2);
        remaining /= 2;
    }

    let mut candidate = 3_u64;
    // u128 keeps the square from overflowing near u64::MAX
    while u128::from(candidate) * u128::from(candidate) <= u128::from(remaining) {
        while remaining % candidate == 0 {
            factors.push(candidate);
            remaining /= candidate;
        }
        candidate += 2;
    }

    if remaining > 2 {
        factors.push(remaining);
    }
    factors
}
