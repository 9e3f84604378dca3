//! Error types for perf-curves.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  Construction-time validation
//! goes through the [`ensure!`](crate::ensure) and
//! [`ensure_table!`](crate::ensure_table) macros.
//!
//! Clamping a query onto the sampled domain is *not* an error; it is
//! reported on the logging channel and evaluation carries on.

use thiserror::Error;

use crate::{Axis, Real};

/// The top-level error type used throughout perf-curves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A performance table violates its structural invariants (axis
    /// ordering, value count, finiteness).  Raised at construction time.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// The bracketing interval collapsed to zero width while
    /// interpolating.  Only reachable through a table that bypassed
    /// validation.
    #[error("degenerate table: zero-width {axis} interval [{lower}, {upper}]")]
    DegenerateTable {
        /// Axis on which the interval collapsed.
        axis: Axis,
        /// Lower sample of the bracket.
        lower: Real,
        /// Upper sample of the bracket.
        upper: Real,
    },

    /// A query coordinate lies outside the sampled domain and the
    /// interpolator was configured to refuse extrapolation.
    #[error("{axis} = {value} outside sampled domain [{min}, {max}]")]
    OutOfDomain {
        /// Offending axis.
        axis: Axis,
        /// Requested coordinate.
        value: Real,
        /// Lowest sampled coordinate.
        min: Real,
        /// Highest sampled coordinate.
        max: Real,
    },

    /// A query coordinate is NaN.
    #[error("{axis} is not a number")]
    NonFiniteInput {
        /// Offending axis.
        axis: Axis,
    },

    /// The interpolated value is not representable (overflow on a table
    /// whose samples are all finite but extreme).
    #[error("evaluation produced a non-finite result ({value})")]
    NonFiniteResult {
        /// The overflowed value.
        value: Real,
    },

    /// Precondition violated (invalid constructor arguments).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout perf-curves.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pc_core::ensure;
/// fn positive(x: f64) -> pc_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Returns `Err(Error::MalformedTable(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pc_core::{ensure_table, Error};
/// fn two_points(xs: &[f64]) -> pc_core::Result<()> {
///     ensure_table!(xs.len() >= 2, "need at least 2 samples, got {}", xs.len());
///     Ok(())
/// }
/// assert!(two_points(&[0.0, 1.0]).is_ok());
/// assert!(matches!(two_points(&[0.0]), Err(Error::MalformedTable(_))));
/// ```
#[macro_export]
macro_rules! ensure_table {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::MalformedTable(
                format!($($msg)*)
            ));
        }
    };
}
