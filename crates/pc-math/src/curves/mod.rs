//! Polynomial performance curves.
//!
//! Manufacturers often publish performance as a fitted polynomial rather
//! than a table.  The fit is only valid over the range of the test data,
//! so every curve carries bounds on its independent variables (clamped the
//! same way table queries are) and optional limits on its output.

use pc_core::{ensure, Axis, Real, Result};

use crate::{
    characteristic::PerformanceCurve1D,
    interpolations::{Bounds, Evaluation, InterpolatorOptions},
};

/// Two-variable quadratic with a cross term.
pub mod biquadratic;

pub use biquadratic::Biquadratic;

fn check_coefficients(coefficients: &[Real]) -> Result<()> {
    ensure!(
        coefficients.iter().all(|c| c.is_finite()),
        "curve coefficients must be finite, got {coefficients:?}"
    );
    Ok(())
}

/// Clamp `value` into `limits`, if any.  Output limits are part of the curve
/// definition, not an out-of-domain event, so nothing is logged.
fn limit(value: Real, limits: Option<Bounds>) -> Real {
    match limits {
        Some(b) => value.clamp(b.min(), b.max()),
        None => value,
    }
}

/// Single-variable polynomial `c[0] + c[1] x + ... + c[N-1] x^(N-1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<const N: usize> {
    coefficients: [Real; N],
    x_bounds: Bounds,
    output_limits: Option<Bounds>,
    options: InterpolatorOptions,
}

/// `c1 + c2 x + c3 x²`.
pub type Quadratic = Polynomial<3>;

/// `c1 + c2 x + c3 x² + c4 x³`.
pub type Cubic = Polynomial<4>;

impl<const N: usize> Polynomial<N> {
    /// Curve with the given coefficients (constant term first), valid over
    /// `x_bounds`.
    ///
    /// # Errors
    /// Returns an error if any coefficient is not finite.
    pub fn new(coefficients: [Real; N], x_bounds: Bounds) -> Result<Self> {
        check_coefficients(&coefficients)?;
        Ok(Self {
            coefficients,
            x_bounds,
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

    /// Coefficients, constant term first.
    pub fn coefficients(&self) -> &[Real; N] {
        &self.coefficients
    }

    /// Output limits, if any.
    pub fn output_limits(&self) -> Option<Bounds> {
        self.output_limits
    }
}

impl<const N: usize> PerformanceCurve1D for Polynomial<N> {
    fn evaluate_detailed(&self, x: Real) -> Result<Evaluation> {
        let mut clamps = Vec::new();
        let x = self
            .x_bounds
            .resolve(Axis::X, x, &self.options, &mut clamps)?;
        // Horner
        let raw = self
            .coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c);
        Ok(Evaluation {
            value: limit(raw, self.output_limits),
            clamps,
        })
    }

    fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }
}
