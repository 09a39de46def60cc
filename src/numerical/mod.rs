//! Number sequences and integer arithmetic.
//!
//! - [`fibonacci`]: The nth Fibonacci number, computed iteratively
//! - [`prime_factors`]: Prime factorisation by trial division
//! - [`num_guesses`]: Size of a brute-force password search space
//!
//! The routines that can outgrow their return type use checked arithmetic
//! and report [`AlgorithmError::Overflow`](crate::error::AlgorithmError::Overflow)
//! instead of wrapping.

mod fibonacci;
mod guesses;
mod prime_factors;

pub use fibonacci::fibonacci;
pub use guesses::num_guesses;
pub use prime_factors::prime_factors;
