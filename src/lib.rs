//! # algorithmics
//!
//! Classic array algorithms with small, explicit contracts.
//!
//! ## Overview
//!
//! Every function in this crate is independent and synchronous. Nothing is
//! cached between calls; the in-place sorts only touch the slice they are
//! given. It includes:
//!
//! - **Searching**: order-preserving deduplication, binary search
//! - **Sorting**: bubble, insertion, selection, merge and quick sort
//! - **Numerical**: iterative Fibonacci, prime factors, guess counting
//! - **Combinatorics**: powerset, permutations, subset sum, travelling salesman
//!
//! ## Feature Flags
//!
//! - `searching`: [`searching`] module
//! - `sorting`: [`sorting`] module
//! - `numerical`: [`numerical`] module
//! - `combinatorics`: [`combinatorics`] module
//! - `serde`: `Serialize`/`Deserialize` for `SortAlgorithm`
//! - `fxhash` / `ahash`: faster hasher for deduplication
//! - `full`: Enable all modules and `serde`
//!
//! ## Errors
//!
//! Contract violations (searching an empty slice, a negative Fibonacci
//! index, ...) are reported as [`error::AlgorithmError`] values. Every other
//! function is total: empty input is a normal case with an empty result.
//!
//! ## Logging
//!
//! Diagnostics go through the [`tracing`] facade. The crate never installs a
//! subscriber, so nothing is recorded unless the application sets one up.
//!
//! ## Example
//!
//! ```rust
//! use algorithmics::prelude::*;
//!
//! let unique = deduplicate(&[5, 3, 5, 1, 4, 3, 2]);
//! let sorted = merge_sort(&unique);
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! assert_eq!(binary_search(&4, &sorted), Ok(true));
//! assert_eq!(fibonacci(10), Ok(55));
//! assert_eq!(powerset(&sorted).len(), 32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every algorithm of the enabled modules plus the error type.
///
/// # Usage
///
/// ```rust
/// use algorithmics::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::AlgorithmError;

    #[cfg(feature = "searching")]
    pub use crate::searching::*;

    #[cfg(feature = "sorting")]
    pub use crate::sorting::*;

    #[cfg(feature = "numerical")]
    pub use crate::numerical::*;

    #[cfg(feature = "combinatorics")]
    pub use crate::combinatorics::*;
}

pub mod error;

#[cfg(feature = "searching")]
pub mod searching;

#[cfg(feature = "sorting")]
pub mod sorting;

#[cfg(feature = "numerical")]
pub mod numerical;

#[cfg(feature = "combinatorics")]
pub mod combinatorics;
