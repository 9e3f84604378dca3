//! Linear interpolation over a [`PerformanceTable1D`].
//!
//! `f(x) = (v1 (x2 - x) + v2 (x - x1)) / (x2 - x1)` on the bracket
//! `x1 <= x <= x2`, after clamping `x` onto the sampled range.

use pc_core::{Axis, Real, Result};

use super::{
    bracket_width, checked_ratio, exact_sample, finite, fraction, locate, Bounds, Evaluation,
    InterpolatorOptions,
};
use crate::{characteristic::PerformanceCurve1D, table::PerformanceTable1D};

/// Linear interpolator bound to one single-variable table.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTableInterpolator {
    table: PerformanceTable1D,
    options: InterpolatorOptions,
}

impl LinearTableInterpolator {
    /// Interpolator with default options (clamp and warn).
    pub fn new(table: PerformanceTable1D) -> Self {
        Self::with_options(table, InterpolatorOptions::default())
    }

    /// Interpolator with explicit options.
    pub fn with_options(table: PerformanceTable1D, options: InterpolatorOptions) -> Self {
        Self { table, options }
    }

    /// The underlying table.
    pub fn table(&self) -> &PerformanceTable1D {
        &self.table
    }
}

impl PerformanceCurve1D for LinearTableInterpolator {
    fn evaluate_detailed(&self, x: Real) -> Result<Evaluation> {
        let mut clamps = Vec::new();
        let x = self
            .table
            .bounds()
            .resolve(Axis::X, x, &self.options, &mut clamps)?;

        let xs = self.table.axis();
        let vs = self.table.values();
        let i = locate(xs, x);
        if let Some(k) = exact_sample(xs, i, x) {
            return Ok(Evaluation {
                value: vs[k],
                clamps,
            });
        }

        let (x1, x2) = (xs[i], xs[i + 1]);
        let dx = bracket_width(Axis::X, x1, x2)?;
        let numerator = vs[i] * (x2 - x) + vs[i + 1] * (x - x1);
        let value = checked_ratio(numerator, dx).unwrap_or_else(|| {
            let t = fraction(x1, x2, x);
            (1.0 - t) * vs[i] + t * vs[i + 1]
        });
        Ok(Evaluation {
            value: finite(value)?,
            clamps,
        })
    }

    fn x_bounds(&self) -> Bounds {
        self.table.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LinearTableInterpolator {
        LinearTableInterpolator::with_options(
            PerformanceTable1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap(),
            InterpolatorOptions::default().with_clamp_warnings(false),
        )
    }

    #[test]
    fn linear_interpolation() {
        let interp = table();
        assert!((interp.evaluate(0.5).unwrap() - 0.5).abs() < 1e-12);
        assert!((interp.evaluate(1.5).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn samples_are_returned_exactly() {
        let interp = table();
        assert_eq!(interp.evaluate(1.0).unwrap(), 1.0);
        assert_eq!(interp.evaluate(2.0).unwrap(), 4.0);
    }

    #[test]
    fn outside_range_is_flat() {
        let interp = table();
        let e = interp.evaluate_detailed(-3.0).unwrap();
        assert_eq!(e.value, 0.0);
        assert_eq!(e.clamps[0].clamped_to, 0.0);
        assert_eq!(interp.evaluate(7.0).unwrap(), 4.0);
    }

    #[test]
    fn very_wide_axis_does_not_overflow() {
        let t = PerformanceTable1D::new(vec![-1e308, 1e308], vec![1.0, 3.0]).unwrap();
        let interp = LinearTableInterpolator::new(t);
        assert_eq!(interp.evaluate(0.0).unwrap(), 2.0);
        assert_eq!(interp.evaluate(1e308).unwrap(), 3.0);
    }
}
