//! Exhaustive enumeration: subsets, orderings and the problems solved by
//! trying all of them.
//!
//! - [`powerset`]: Every subset of a slice
//! - [`permutations`]: Every ordering of a slice (Heap's algorithm)
//! - [`subset_sum`]: Whether some subset adds up to a target
//! - [`tsp`] / [`verify_tsp`]: Brute-force travelling salesman decision
//!   problem and its linear-time verifier
//!
//! Everything here is exponential or factorial in the input length; that
//! cost is intrinsic to enumerating the whole search space. Callers bound
//! input sizes themselves. Enumerations above [`LARGE_POWERSET_INPUT`] or
//! [`LARGE_PERMUTATION_INPUT`] elements log a `tracing` warning.
//!
//! | Input length | Subsets (2^n)   | Orderings (n!)        |
//! |--------------|-----------------|-----------------------|
//! | 10           | 1 024           | 3 628 800             |
//! | 20           | 1 048 576       | 2.4 × 10^18           |
//! | 40           | 1.1 × 10^12     | 8.2 × 10^47           |

mod permutations;
mod powerset;
mod subset_sum;
mod tsp;

pub use permutations::permutations;
pub use powerset::powerset;
pub use subset_sum::subset_sum;
pub use tsp::{tsp, verify_tsp};

/// Input length above which [`powerset`] warns about its output size.
pub const LARGE_POWERSET_INPUT: usize = 20;

/// Input length above which [`permutations`] and [`tsp`] warn about their
/// running time.
pub const LARGE_PERMUTATION_INPUT: usize = 10;
