//! Lookup algorithms over slices.
//!
//! - [`deduplicate`]: Drop repeated values, keeping first-occurrence order
//! - [`binary_search`]: Membership test on a slice sorted ascending
//!
//! # Examples
//!
//! ```rust
//! use algorithmics::searching::{binary_search, deduplicate};
//!
//! let unique = deduplicate(&[4, 1, 4, 2, 1]);
//! assert_eq!(unique, vec![4, 1, 2]);
//!
//! assert_eq!(binary_search(&5, &[1, 3, 5, 7, 9]), Ok(true));
//! assert_eq!(binary_search(&4, &[1, 3, 5, 7, 9]), Ok(false));
//! ```
//!
//! # Hashing
//!
//! [`deduplicate`] tracks the values it has already emitted in a hash set.
//! The hasher is picked at compile time:
//!
//! | Feature   | Set type                  |
//! |-----------|---------------------------|
//! | (none)    | `std::collections::HashSet` |
//! | `fxhash`  | `rustc_hash::FxHashSet`   |
//! | `ahash`   | `ahash::AHashSet`         |
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` is used.

mod binary_search;
mod deduplicate;

pub use binary_search::binary_search;
pub use deduplicate::deduplicate;
