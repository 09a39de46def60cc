//! Brute-force search space sizes.

use crate::error::AlgorithmError;

/// Letters in the lowercase latin alphabet.
const ALPHABET_SIZE: u128 = 26;

/// Returns how many lowercase strings have a length between 1 and `length`.
///
/// This is the number of guesses an exhaustive attack needs to cover every
/// lowercase password up to `length` characters: `26 + 26² + ... + 26^length`.
///
/// # Errors
///
/// Returns [`AlgorithmError::Overflow`] if the count does not fit in a
/// `u128` (from `length = 28` on).
///
/// # Examples
///
/// ```rust
/// use algorithmics::numerical::num_guesses;
///
/// assert_eq!(num_guesses(0), Ok(0));
/// assert_eq!(num_guesses(1), Ok(26));
/// assert_eq!(num_guesses(2), Ok(26 + 676));
/// ```
pub fn num_guesses(length: u32) -> Result<u128, AlgorithmError> {
    let overflow = || {
        tracing::debug!(function = "num_guesses", length, "result overflows u128");
        AlgorithmError::overflow("num_guesses", length)
    };

    let mut total = 0_u128;
    let mut power = 1_u128;
    for _ in 0..length {
        power = power.checked_mul(ALPHABET_SIZE).ok_or_else(overflow)?;
        total = total.checked_add(power).ok_or_else(overflow)?;
    }
    Ok(total)
}
