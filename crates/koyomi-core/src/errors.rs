//! Error types for koyomi.
//!
//! Every fallible operation in the workspace reports through the single
//! `thiserror`-derived [`Error`] enum.  Validation happens at the API
//! boundary (constructing a `Date` or accepting a raw month number); the rule
//! engines below that boundary are infallible.

use thiserror::Error;

/// The top-level error type used throughout koyomi.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (year, month, day) triple that is not a proleptic Gregorian date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year as supplied.
        year: i32,
        /// Month as supplied.
        month: u8,
        /// Day of month as supplied.
        day: u8,
    },

    /// Month number outside 1–12.
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u8),

    /// Precondition violated by an argument.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout koyomi.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use koyomi_core::{ensure, errors::Error};
/// fn week(n: u8) -> koyomi_core::errors::Result<u8> {
///     ensure!(n >= 1, "week index must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(week(2).is_ok());
/// assert!(week(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use koyomi_core::{fail, errors::Error};
/// fn always_err() -> koyomi_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
