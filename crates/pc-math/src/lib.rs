//! # pc-math
//!
//! Sampled performance tables, the interpolators that evaluate them at
//! off-rated conditions, and the polynomial curve families equipment data
//! is also published as.
//!
//! Every evaluator clamps out-of-range inputs onto its sampled or fitted
//! domain and reports the clamp as a `tracing` warning.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Evaluation traits shared by tables and curves.
pub mod characteristic;

/// Polynomial performance curves.
pub mod curves;

/// Domain handling and table interpolation schemes.
pub mod interpolations;

/// Validated performance tables.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use characteristic::{PerformanceCurve1D, PerformanceCurve2D};
pub use curves::{Biquadratic, Cubic, Polynomial, Quadratic};
pub use interpolations::{
    evaluate, BilinearTableInterpolator, Bounds, ClampEvent, Evaluation, Extrapolation,
    InterpolatorOptions, LinearTableInterpolator,
};
pub use table::{PerformanceTable, PerformanceTable1D};
