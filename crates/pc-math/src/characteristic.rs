//! Evaluation traits for performance characteristics.
//!
//! Equipment data arrives either as a sampled table or as a fitted
//! polynomial.  Reporting code only needs "the value at these conditions",
//! so both forms are evaluated through the same traits.

use std::fmt::Debug;

use pc_core::{Real, Result};

use crate::interpolations::{Bounds, Evaluation};

/// A performance characteristic of one independent variable.
pub trait PerformanceCurve1D: Debug + Send + Sync {
    /// Evaluate at `x`, returning the value and any clamp applied to `x`.
    fn evaluate_detailed(&self, x: Real) -> Result<Evaluation>;

    /// Domain of the independent variable.
    fn x_bounds(&self) -> Bounds;

    /// Evaluate at `x`.
    fn evaluate(&self, x: Real) -> Result<Real> {
        self.evaluate_detailed(x).map(|e| e.value)
    }
}

/// A performance characteristic of two independent variables.
pub trait PerformanceCurve2D: Debug + Send + Sync {
    /// Evaluate at `(x, y)`, returning the value and any clamps applied.
    fn evaluate_detailed(&self, x: Real, y: Real) -> Result<Evaluation>;

    /// Domain of the first independent variable.
    fn x_bounds(&self) -> Bounds;

    /// Domain of the second independent variable.
    fn y_bounds(&self) -> Bounds;

    /// Evaluate at `(x, y)`.
    fn evaluate(&self, x: Real, y: Real) -> Result<Real> {
        self.evaluate_detailed(x, y).map(|e| e.value)
    }

    /// Return `true` if `(x, y)` lies inside the domain, i.e. evaluation
    /// would not clamp.
    fn is_in_range(&self, x: Real, y: Real) -> bool {
        self.x_bounds().contains(x) && self.y_bounds().contains(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        interpolations::InterpolatorOptions, BilinearTableInterpolator, Biquadratic,
        PerformanceTable,
    };

    #[test]
    fn tables_and_curves_share_one_seam() {
        let opts = InterpolatorOptions::default().with_clamp_warnings(false);
        let table = PerformanceTable::new(
            vec![0.0, 10.0],
            vec![0.0, 10.0],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        // 1 + 0.2 x + 0.1 y reproduces the table corners
        let curve = Biquadratic::new(
            [1.0, 0.2, 0.0, 0.1, 0.0, 0.0],
            Bounds::new(0.0, 10.0).unwrap(),
            Bounds::new(0.0, 10.0).unwrap(),
        )
        .unwrap()
        .with_options(opts);

        let characteristics: Vec<Box<dyn PerformanceCurve2D>> = vec![
            Box::new(BilinearTableInterpolator::with_options(table, opts)),
            Box::new(curve),
        ];
        for c in &characteristics {
            assert!((c.evaluate(5.0, 5.0).unwrap() - 2.5).abs() < 1e-12, "{c:?}");
            assert!(c.is_in_range(10.0, 0.0));
            assert!(!c.is_in_range(10.5, 0.0));
        }
    }
}
