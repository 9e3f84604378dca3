//! Names for the independent variables of a performance table or curve.

use std::fmt;

/// One of the (at most two) independent variables of a performance
/// characteristic.
///
/// For equipment curves `X` is usually the indoor temperature and `Y` the
/// outdoor temperature, but nothing here depends on that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First independent variable (outer index of a table).
    X,
    /// Second independent variable (inner index of a table).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}
