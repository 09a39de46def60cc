//! Iterative Fibonacci numbers.

use crate::error::AlgorithmError;

/// Returns the `n`th Fibonacci number, with `F(0) = 0` and `F(1) = 1`.
///
/// The sequence is advanced with a rolling pair of accumulators rather than
/// the textbook double recursion, so the cost is linear in `n` instead of
/// exponential.
///
/// # Errors
///
/// - [`AlgorithmError::InvalidArgument`] if `n` is negative: the sequence is
///   not defined below index 0.
/// - [`AlgorithmError::Overflow`] if `F(n)` does not fit in a `u128`, which
///   happens from `n = 187` on.
///
/// # Examples
///
/// ```rust
/// use algorithmics::numerical::fibonacci;
///
/// assert_eq!(fibonacci(0), Ok(0));
/// assert_eq!(fibonacci(1), Ok(1));
/// assert_eq!(fibonacci(10), Ok(55));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<u128, AlgorithmError> {
    if n < 0 {
        tracing::debug!(function = "fibonacci", n, "negative index");
        return Err(AlgorithmError::invalid_argument(
            "fibonacci",
            format!("sequence must start from 0 or more, got {n}"),
        ));
    }
    if n < 2 {
        return Ok(u128::from(n.unsigned_abs()));
    }

    let (mut grandparent, mut parent) = (0_u128, 1_u128);
    for _ in 1..n {
        let current = grandparent.checked_add(parent).ok_or_else(|| {
            tracing::debug!(function = "fibonacci", n, "result overflows u128");
            AlgorithmError::overflow("fibonacci", n)
        })?;
        grandparent = parent;
        parent = current;
    }
    Ok(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_representable_index() {
        assert_eq!(
            fibonacci(186),
            Ok(332_825_110_087_067_562_321_196_029_789_634_457_848)
        );
        assert!(fibonacci(187).unwrap_err().is_overflow());
    }
}
