//! Bilinear 2D interpolation over a [`PerformanceTable`].
//!
//! The query is first clamped onto the sampled rectangle, then bracketed on
//! each axis by two adjacent samples `x1 <= x <= x2`, `y1 <= y <= y2`.  With
//! corner values `v11 = f(x1, y1)`, `v12 = f(x1, y2)`, `v21 = f(x2, y1)`,
//! `v22 = f(x2, y2)` the estimate is
//!
//! ```text
//! v11 (x2-x)(y2-y) + v12 (x2-x)(y-y1) + v21 (x-x1)(y2-y) + v22 (x-x1)(y-y1)
//! ------------------------------------------------------------------------
//!                          (x2-x1)(y2-y1)
//! ```
//!
//! i.e. each corner weighted by the area of the opposite sub-rectangle.
//! A query that lands exactly on a grid node returns the stored sample.

use pc_core::{Axis, Real, Result};

use super::{
    bracket_width, checked_ratio, exact_sample, finite, fraction, locate, Bounds, Evaluation,
    InterpolatorOptions,
};
use crate::{characteristic::PerformanceCurve2D, table::PerformanceTable};

/// Evaluate `table` at `(x, y)` with the default options: clamp out-of-range
/// coordinates (logging a warning) and interpolate bilinearly.
///
/// # Example
/// ```
/// use pc_math::{evaluate, PerformanceTable};
///
/// let table = PerformanceTable::new(
///     vec![0.0, 10.0],
///     vec![0.0, 10.0],
///     vec![1.0, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
/// assert_eq!(evaluate(&table, 5.0, 5.0).unwrap(), 2.5);
/// assert_eq!(evaluate(&table, -5.0, 5.0).unwrap(), 1.5);
/// ```
pub fn evaluate(table: &PerformanceTable, x: Real, y: Real) -> Result<Real> {
    interpolate(table, x, y, &InterpolatorOptions::default()).map(|e| e.value)
}

fn interpolate(
    table: &PerformanceTable,
    x: Real,
    y: Real,
    options: &InterpolatorOptions,
) -> Result<Evaluation> {
    let mut clamps = Vec::new();
    let x = table.axis_1_bounds().resolve(Axis::X, x, options, &mut clamps)?;
    let y = table.axis_2_bounds().resolve(Axis::Y, y, options, &mut clamps)?;

    let xs = table.axis_1();
    let ys = table.axis_2();
    let i = locate(xs, x);
    let j = locate(ys, y);

    let (n2, v) = (ys.len(), table.values());
    let at = |i: usize, j: usize| v[i * n2 + j];

    if let (Some(ei), Some(ej)) = (exact_sample(xs, i, x), exact_sample(ys, j, y)) {
        return Ok(Evaluation {
            value: at(ei, ej),
            clamps,
        });
    }

    let (x1, x2) = (xs[i], xs[i + 1]);
    let (y1, y2) = (ys[j], ys[j + 1]);
    let dx = bracket_width(Axis::X, x1, x2)?;
    let dy = bracket_width(Axis::Y, y1, y2)?;

    let v11 = at(i, j);
    let v12 = at(i, j + 1);
    let v21 = at(i + 1, j);
    let v22 = at(i + 1, j + 1);

    let numerator = v11 * (x2 - x) * (y2 - y)
        + v12 * (x2 - x) * (y - y1)
        + v21 * (x - x1) * (y2 - y)
        + v22 * (x - x1) * (y - y1);
    let value = match checked_ratio(numerator, dx * dy) {
        Some(value) => value,
        // Axis spans too wide for the area form: blend by fractions instead.
        None => {
            let tx = fraction(x1, x2, x);
            let ty = fraction(y1, y2, y);
            (1.0 - tx) * ((1.0 - ty) * v11 + ty * v12) + tx * ((1.0 - ty) * v21 + ty * v22)
        }
    };

    Ok(Evaluation {
        value: finite(value)?,
        clamps,
    })
}

/// Bilinear interpolator bound to one table and one set of options.
///
/// The table is immutable; an interpolator can be shared across threads
/// (e.g. behind an `Arc`) and queried concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearTableInterpolator {
    table: PerformanceTable,
    options: InterpolatorOptions,
}

impl BilinearTableInterpolator {
    /// Interpolator with default options (clamp and warn).
    pub fn new(table: PerformanceTable) -> Self {
        Self::with_options(table, InterpolatorOptions::default())
    }

    /// Interpolator with explicit options.
    pub fn with_options(table: PerformanceTable, options: InterpolatorOptions) -> Self {
        Self { table, options }
    }

    /// The underlying table.
    pub fn table(&self) -> &PerformanceTable {
        &self.table
    }

    /// The evaluation options.
    pub fn options(&self) -> &InterpolatorOptions {
        &self.options
    }
}

impl PerformanceCurve2D for BilinearTableInterpolator {
    fn evaluate_detailed(&self, x: Real, y: Real) -> Result<Evaluation> {
        interpolate(&self.table, x, y, &self.options)
    }

    fn x_bounds(&self) -> Bounds {
        self.table.axis_1_bounds()
    }

    fn y_bounds(&self) -> Bounds {
        self.table.axis_2_bounds()
    }
}

#[cfg(test)]
mod tests {
    use pc_core::Error;

    use super::*;
    use crate::interpolations::{ClampEvent, Extrapolation};

    fn corners() -> PerformanceTable {
        // v(0,0)=1, v(0,10)=2, v(10,0)=3, v(10,10)=4
        PerformanceTable::new(vec![0.0, 10.0], vec![0.0, 10.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    fn quiet() -> InterpolatorOptions {
        InterpolatorOptions::default().with_clamp_warnings(false)
    }

    #[test]
    fn centre_of_patch_is_corner_average() {
        assert_eq!(evaluate(&corners(), 5.0, 5.0).unwrap(), 2.5);
    }

    #[test]
    fn low_x_is_clamped_to_first_sample() {
        let t = corners();
        assert_eq!(evaluate(&t, -5.0, 5.0).unwrap(), 1.5);
        assert_eq!(evaluate(&t, 0.0, 5.0).unwrap(), 1.5);
    }

    #[test]
    fn grid_corner_is_returned_exactly() {
        assert_eq!(evaluate(&corners(), 0.0, 0.0).unwrap(), 1.0);
        assert_eq!(evaluate(&corners(), 10.0, 10.0).unwrap(), 4.0);
    }

    #[test]
    fn affine_table_is_reproduced() {
        let axis = vec![0.0, 5.0, 10.0];
        let mut values = Vec::new();
        for &x in &axis {
            for &y in &axis {
                values.push(2.0 * x + 3.0 * y);
            }
        }
        let t = PerformanceTable::new(axis.clone(), axis, values).unwrap();
        assert_eq!(evaluate(&t, 3.0, 4.0).unwrap(), 18.0);
    }

    #[test]
    fn edges_interpolate_linearly() {
        let t = corners();
        // along x = 10 between 3 and 4
        assert_eq!(evaluate(&t, 10.0, 2.5).unwrap(), 3.25);
        // along y = 0 between 1 and 3
        assert_eq!(evaluate(&t, 7.5, 0.0).unwrap(), 2.5);
    }

    #[test]
    fn detailed_evaluation_reports_clamps() {
        let interp = BilinearTableInterpolator::with_options(corners(), quiet());
        let e = interp.evaluate_detailed(-5.0, 25.0).unwrap();
        assert_eq!(e.value, 2.0);
        assert_eq!(
            e.clamps,
            vec![
                ClampEvent {
                    axis: Axis::X,
                    requested: -5.0,
                    clamped_to: 0.0,
                },
                ClampEvent {
                    axis: Axis::Y,
                    requested: 25.0,
                    clamped_to: 10.0,
                },
            ]
        );
        assert!(!interp.evaluate_detailed(5.0, 5.0).unwrap().was_clamped());
    }

    #[test]
    fn error_policy_refuses_out_of_domain() {
        let interp = BilinearTableInterpolator::with_options(
            corners(),
            quiet().with_extrapolation(Extrapolation::Error),
        );
        assert_eq!(
            interp.evaluate(11.0, 5.0),
            Err(Error::OutOfDomain {
                axis: Axis::X,
                value: 11.0,
                min: 0.0,
                max: 10.0,
            })
        );
        assert_eq!(interp.evaluate(10.0, 5.0).unwrap(), 3.5);
    }

    #[test]
    fn nan_query_is_an_error() {
        assert_eq!(
            evaluate(&corners(), 1.0, Real::NAN),
            Err(Error::NonFiniteInput { axis: Axis::Y })
        );
    }

    #[test]
    fn infinite_query_is_clamped() {
        let v = evaluate(&corners(), Real::INFINITY, Real::NEG_INFINITY);
        assert_eq!(v, Ok(3.0));
    }

    #[test]
    fn very_wide_axes_do_not_overflow() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let t = PerformanceTable::new(vec![0.0, 1e200], vec![0.0, 1e200], values.clone()).unwrap();
        assert_eq!(evaluate(&t, 5e199, 5e199).unwrap(), 2.5);
        assert_eq!(evaluate(&t, 0.0, 5e199).unwrap(), 1.5);

        let t = PerformanceTable::new(vec![-1e308, 1e308], vec![0.0, 10.0], values).unwrap();
        assert_eq!(evaluate(&t, 0.0, 5.0).unwrap(), 2.5);
        assert_eq!(evaluate(&t, -1e308, 5.0).unwrap(), 1.5);
    }

    #[test]
    fn extreme_values_on_wide_axes_stay_finite() {
        let huge = vec![Real::MAX; 4];
        let t = PerformanceTable::new(vec![0.0, 1e200], vec![0.0, 1e200], huge).unwrap();
        assert_eq!(evaluate(&t, 5e199, 5e199).unwrap(), Real::MAX);
        assert_eq!(evaluate(&t, 1e200, 0.0).unwrap(), Real::MAX);
    }

    #[test]
    fn interpolator_exposes_table_domain() {
        let interp = BilinearTableInterpolator::new(corners());
        assert_eq!(interp.x_bounds(), Bounds::new(0.0, 10.0).unwrap());
        assert_eq!(interp.y_bounds(), Bounds::new(0.0, 10.0).unwrap());
        assert_eq!(interp.options(), &InterpolatorOptions::default());
        assert_eq!(interp.table().shape(), (2, 2));
    }
}
