//! Error types shared by every algorithm module.
//!
//! Most routines in this crate are total over their input. The few that are
//! not (searching an empty slice, Fibonacci below index 0, sums that leave
//! `u128`) report the failure through [`AlgorithmError`] instead of
//! panicking.

use static_assertions::assert_impl_all;

/// A function was called with an argument outside its contract.
///
/// # Examples
///
/// ```rust
/// use algorithmics::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::new("binary_search", "nums can't be empty");
/// assert_eq!(
///     format!("{}", error),
///     "binary_search: invalid argument: nums can't be empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the function that rejected the argument.
    pub function: &'static str,
    /// A human readable description of what was wrong.
    pub reason: String,
}

impl InvalidArgumentError {
    /// Creates a new error for `function` with the given `reason`.
    pub fn new(function: &'static str, reason: impl Into<String>) -> Self {
        Self {
            function,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: invalid argument: {}",
            self.function, self.reason
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// A result did not fit in the integer type returned by the function.
///
/// # Examples
///
/// ```rust
/// use algorithmics::error::OverflowError;
///
/// let error = OverflowError {
///     function: "fibonacci",
///     input: 200,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "fibonacci: result for input 200 overflows u128"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError {
    /// The name of the function whose result overflowed.
    pub function: &'static str,
    /// The input that produced the overflow.
    pub input: i128,
}

impl std::fmt::Display for OverflowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: result for input {} overflows u128",
            self.function, self.input
        )
    }
}

impl std::error::Error for OverflowError {}

/// Represents every error an algorithm in this crate can report.
///
/// # Examples
///
/// ```rust
/// use algorithmics::error::{AlgorithmError, InvalidArgumentError};
///
/// let error: AlgorithmError =
///     InvalidArgumentError::new("fibonacci", "n must be 0 or more").into();
/// assert!(error.is_invalid_argument());
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// An argument was outside the function's contract.
    InvalidArgument(InvalidArgumentError),
    /// The result does not fit in the return type.
    Overflow(OverflowError),
}

impl AlgorithmError {
    /// Shorthand for building an [`AlgorithmError::InvalidArgument`].
    pub fn invalid_argument(function: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument(InvalidArgumentError::new(function, reason))
    }

    /// Shorthand for building an [`AlgorithmError::Overflow`].
    pub fn overflow(function: &'static str, input: impl Into<i128>) -> Self {
        Self::Overflow(OverflowError {
            function,
            input: input.into(),
        })
    }

    /// Returns `true` if this is an [`AlgorithmError::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an [`AlgorithmError::Overflow`].
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// The name of the function that reported the error.
    pub const fn function(&self) -> &'static str {
        match self {
            Self::InvalidArgument(error) => error.function,
            Self::Overflow(error) => error.function,
        }
    }
}

impl std::fmt::Display for AlgorithmError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::Overflow(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::Overflow(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for AlgorithmError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<OverflowError> for AlgorithmError {
    fn from(error: OverflowError) -> Self {
        Self::Overflow(error)
    }
}

assert_impl_all!(AlgorithmError: Send, Sync, Clone, std::error::Error);
assert_impl_all!(InvalidArgumentError: Send, Sync, Clone, std::error::Error);
assert_impl_all!(OverflowError: Send, Sync, Copy, std::error::Error);
