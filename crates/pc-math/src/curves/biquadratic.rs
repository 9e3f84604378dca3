//! `c1 + c2 x + c3 x² + c4 y + c5 y² + c6 x y`
//!
//! The usual form for capacity and EIR modifiers of DX and VRF equipment as
//! a function of indoor (`x`) and outdoor (`y`) temperature.

use pc_core::{Axis, Real, Result};

use super::{check_coefficients, limit};
use crate::{
    characteristic::PerformanceCurve2D,
    interpolations::{Bounds, Evaluation, InterpolatorOptions},
};

/// Biquadratic performance curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquadratic {
    coefficients: [Real; 6],
    x_bounds: Bounds,
    y_bounds: Bounds,
    output_limits: Option<Bounds>,
    options: InterpolatorOptions,
}

impl Biquadratic {
    /// Curve with coefficients `[c1, .., c6]` valid over
    /// `x_bounds × y_bounds`.
    pub fn new(coefficients: [Real; 6], x_bounds: Bounds, y_bounds: Bounds) -> Result<Self> {
        check_coefficients(&coefficients)?;
        Ok(Self {
            coefficients,
            x_bounds,
            y_bounds,
            output_limits: None,
            options: InterpolatorOptions::default(),
        })
    }

    /// Restrict the output to `[min, max]`.
    pub fn with_output_limits(mut self, min: Real, max: Real) -> Result<Self> {
        self.output_limits = Some(Bounds::new(min, max)?);
        Ok(self)
    }

    /// Replace the evaluation options.
    pub fn with_options(mut self, options: InterpolatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Coefficients `[c1, .., c6]`.
    pub fn coefficients(&self) -> &[Real; 6] {
        &self.coefficients
    }
}

impl PerformanceCurve2D for Biquadratic {
    fn evaluate_detailed(&self, x: Real, y: Real) -> Result<Evaluation> {
        let mut clamps = Vec::new();
        let x = self
            .x_bounds
            .resolve(Axis::X, x, &self.options, &mut clamps)?;
        let y = self
            .y_bounds
            .resolve(Axis::Y, y, &self.options, &mut clamps)?;
        let [c1, c2, c3, c4, c5, c6] = self.coefficients;
        let raw = c1 + x * (c2 + c3 * x) + y * (c4 + c5 * y) + c6 * x * y;
        Ok(Evaluation {
            value: limit(raw, self.output_limits),
            clamps,
        })
    }

    fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }

    fn y_bounds(&self) -> Bounds {
        self.y_bounds
    }
}
