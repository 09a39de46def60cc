//! Travelling salesman, decision version.
//!
//! Distances are given as a square matrix where `distances[a][b]` is the
//! length of the leg from city `a` to city `b`. A tour visits the listed
//! cities in order and does not return to its start, so its length is the
//! sum of its consecutive legs.

use super::{permutations, LARGE_PERMUTATION_INPUT};
use crate::error::AlgorithmError;

/// Returns whether some ordering of `cities` has a total length strictly
/// below `bound`.
///
/// Tries every ordering (see [`permutations`]) and stops at the first one
/// that beats the bound.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidArgument`] if `distances` is not square
/// or a city index falls outside it.
///
/// # Complexity
///
/// O(n · n!) for `n` cities.
///
/// # Examples
///
/// ```rust
/// use algorithmics::combinatorics::tsp;
///
/// let distances = vec![
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ];
/// // 1 -> 0 -> 2 is 10 + 15 = 25
/// assert_eq!(tsp(&[0, 1, 2], &distances, 26), Ok(true));
/// assert_eq!(tsp(&[0, 1, 2], &distances, 25), Ok(false));
/// ```
pub fn tsp(cities: &[usize], distances: &[Vec<u64>], bound: u64) -> Result<bool, AlgorithmError> {
    validate("tsp", distances, cities)?;
    if cities.len() > LARGE_PERMUTATION_INPUT {
        tracing::warn!(cities = cities.len(), "brute-force tour search over many cities");
    }

    Ok(permutations(cities)
        .iter()
        .any(|tour| tour_length(distances, tour) < bound))
}

/// Returns whether `tour` has a total length strictly below `bound`.
///
/// This is the cheap half of the decision problem: checking one candidate
/// answer takes linear time while finding one takes factorial time.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidArgument`] if `distances` is not square
/// or a city index in `tour` falls outside it.
///
/// # Examples
///
/// ```rust
/// use algorithmics::combinatorics::verify_tsp;
///
/// let distances = vec![vec![0, 4], vec![4, 0]];
/// assert_eq!(verify_tsp(&distances, 5, &[0, 1]), Ok(true));
/// assert_eq!(verify_tsp(&distances, 4, &[1, 0]), Ok(false));
/// ```
pub fn verify_tsp(distances: &[Vec<u64>], bound: u64, tour: &[usize]) -> Result<bool, AlgorithmError> {
    validate("verify_tsp", distances, tour)?;
    Ok(tour_length(distances, tour) < bound)
}

/// Saturates instead of overflowing; a saturated length never beats a bound.
fn tour_length(distances: &[Vec<u64>], tour: &[usize]) -> u64 {
    tour.windows(2)
        .map(|leg| distances[leg[0]][leg[1]])
        .fold(0, u64::saturating_add)
}

fn validate(
    function: &'static str,
    distances: &[Vec<u64>],
    cities: &[usize],
) -> Result<(), AlgorithmError> {
    let size = distances.len();
    if let Some((row, width)) = distances
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, width)| *width != size)
    {
        tracing::debug!(function, size, row, width, "distance matrix is not square");
        return Err(AlgorithmError::invalid_argument(
            function,
            format!("distance matrix row {row} has {width} entries, expected {size}"),
        ));
    }
    if let Some(city) = cities.iter().find(|city| **city >= size) {
        tracing::debug!(function, size, city, "city index outside distance matrix");
        return Err(AlgorithmError::invalid_argument(
            function,
            format!("city {city} is outside a {size}x{size} distance matrix"),
        ));
    }
    Ok(())
}
