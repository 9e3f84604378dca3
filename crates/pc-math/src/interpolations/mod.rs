//! Table interpolation and the domain handling shared by every evaluator.
//!
//! Queries outside the sampled (or fitted) range are clamped to the nearest
//! bound by default.  Each clamp is logged through `tracing` and recorded as
//! a [`ClampEvent`] on the returned [`Evaluation`]; neither changes the
//! numeric result.

use pc_core::{ensure, Axis, Error, Real, Result, Size};

/// Bilinear interpolation over a two-variable table.
pub mod bilinear;

/// Linear interpolation over a single-variable table.
pub mod linear;

pub use bilinear::{evaluate, BilinearTableInterpolator};
pub use linear::LinearTableInterpolator;

// ── Domain ────────────────────────────────────────────────────────────────────

/// Closed interval `[min, max]` of an independent variable.
///
/// Only obtainable through [`Bounds::new`], [`Bounds::unbounded`] or a
/// validated table, so `min <= max` and neither bound is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Real,
    max: Real,
}

impl Bounds {
    /// Build `[min, max]`.
    ///
    /// # Errors
    /// Returns an error if either bound is NaN or `min > max`.
    pub fn new(min: Real, max: Real) -> Result<Self> {
        ensure!(
            !min.is_nan() && !max.is_nan(),
            "bounds must not be NaN: [{min}, {max}]"
        );
        ensure!(min <= max, "lower bound {min} exceeds upper bound {max}");
        Ok(Self { min, max })
    }

    /// The whole real line; nothing is ever clamped.
    pub fn unbounded() -> Self {
        Self {
            min: Real::NEG_INFINITY,
            max: Real::INFINITY,
        }
    }

    /// First and last element of an already validated, sorted axis.
    pub(crate) fn of_samples(samples: &[Real]) -> Self {
        Self {
            min: samples[0],
            max: samples[samples.len() - 1],
        }
    }

    /// Lower bound.
    pub fn min(&self) -> Real {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Real {
        self.max
    }

    /// Return `true` if `v` lies inside the interval.
    pub fn contains(&self, v: Real) -> bool {
        v >= self.min && v <= self.max
    }

    /// Map `value` onto the interval according to `options`, recording any
    /// clamp in `clamps`.
    pub(crate) fn resolve(
        &self,
        axis: Axis,
        value: Real,
        options: &InterpolatorOptions,
        clamps: &mut Vec<ClampEvent>,
    ) -> Result<Real> {
        if value.is_nan() {
            return Err(Error::NonFiniteInput { axis });
        }
        let bound = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            return Ok(value);
        };
        if options.extrapolation == Extrapolation::Error {
            return Err(Error::OutOfDomain {
                axis,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if options.warn_on_clamp {
            tracing::warn!(
                %axis,
                requested = value,
                clamped_to = bound,
                "query outside sampled domain, clamping to nearest bound"
            );
        }
        clamps.push(ClampEvent {
            axis,
            requested: value,
            clamped_to: bound,
        });
        Ok(bound)
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

/// What to do with a query coordinate outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Replace the coordinate with the nearest bound and carry on.
    #[default]
    Clamp,
    /// Fail with [`Error::OutOfDomain`].
    Error,
}

/// Evaluation settings shared by tables and curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolatorOptions {
    /// Out-of-domain policy.
    pub extrapolation: Extrapolation,
    /// Emit a `tracing` warning for every clamp.
    pub warn_on_clamp: bool,
}

impl Default for InterpolatorOptions {
    fn default() -> Self {
        Self {
            extrapolation: Extrapolation::Clamp,
            warn_on_clamp: true,
        }
    }
}

impl InterpolatorOptions {
    /// Set the out-of-domain policy.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Enable or disable clamp warnings on the log channel.
    pub fn with_clamp_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_clamp = enabled;
        self
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// One coordinate replaced by the nearest bound of its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampEvent {
    /// Axis that was clamped.
    pub axis: Axis,
    /// Coordinate as requested.
    pub requested: Real,
    /// Bound actually used.
    pub clamped_to: Real,
}

/// Result of an evaluation together with its out-of-domain diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Dependent-variable estimate.
    pub value: Real,
    /// Clamps applied to the inputs, in axis order.
    pub clamps: Vec<ClampEvent>,
}

impl Evaluation {
    /// Return `true` if any input was clamped.
    pub fn was_clamped(&self) -> bool {
        !self.clamps.is_empty()
    }
}

// ── Bracketing ────────────────────────────────────────────────────────────────

/// Find `k` such that `xs[k] <= x <= xs[k + 1]` for `x` inside the sampled
/// range.  `xs` must hold at least two sorted samples; the result is always
/// in `0..=xs.len() - 2`, so the bracket never collapses on a valid axis.
pub(crate) fn locate(xs: &[Real], x: Real) -> Size {
    let below_or_at = xs.partition_point(|&s| s <= x);
    below_or_at.saturating_sub(1).min(xs.len() - 2)
}

/// Index within the bracket `[k, k + 1]` whose sample equals `x` exactly.
pub(crate) fn exact_sample(xs: &[Real], k: Size, x: Real) -> Option<Size> {
    if xs[k] == x {
        Some(k)
    } else if xs[k + 1] == x {
        Some(k + 1)
    } else {
        None
    }
}

/// Width of the bracket `[lower, upper]`, or `DegenerateTable` if it is not
/// strictly positive.  Samples of opposite sign near `Real::MAX` give a width
/// of `+inf`; [`fraction`] still places a query inside such a bracket.
pub(crate) fn bracket_width(axis: Axis, lower: Real, upper: Real) -> Result<Real> {
    let width = upper - lower;
    if width > 0.0 {
        Ok(width)
    } else {
        Err(Error::DegenerateTable { axis, lower, upper })
    }
}

/// Position of `v` in `[lower, upper]` as a fraction in `[0, 1]`, without
/// overflowing when the width itself is not representable.
pub(crate) fn fraction(lower: Real, upper: Real, v: Real) -> Real {
    let width = upper - lower;
    let t = if width.is_finite() {
        (v - lower) / width
    } else {
        (0.5 * v - 0.5 * lower) / (0.5 * upper - 0.5 * lower)
    };
    t.clamp(0.0, 1.0)
}

/// `numerator / denominator` if every part of it is representable.
pub(crate) fn checked_ratio(numerator: Real, denominator: Real) -> Option<Real> {
    let ratio = numerator / denominator;
    (numerator.is_finite() && denominator.is_normal() && ratio.is_finite()).then_some(ratio)
}

/// Reject a result that overflowed.
pub(crate) fn finite(value: Real) -> Result<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResult { value })
    }
}
