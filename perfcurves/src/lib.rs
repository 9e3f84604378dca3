//! # perfcurves
//!
//! Evaluate equipment performance tables and curves at off-rated
//! conditions, e.g. the heating COP of a heat pump at -22 °F outdoors
//! from manufacturer data sampled between -4 °F and 59 °F.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `pc-core` / `pc-math` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use perfcurves::prelude::*;
//!
//! let table = PerformanceTable::new(
//!     vec![0.0, 10.0],
//!     vec![0.0, 10.0],
//!     vec![1.0, 2.0, 3.0, 4.0],
//! )?;
//! let cop = BilinearTableInterpolator::new(table);
//! assert_eq!(cop.evaluate(5.0, 5.0)?, 2.5);
//! # Ok::<(), perfcurves::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pc_core as core;

/// Performance tables, interpolators, and curves.
pub use pc_math as math;

/// The types most callers need.
pub mod prelude {
    pub use pc_core::{Axis, Error, Real, Result};
    pub use pc_math::{
        evaluate, BilinearTableInterpolator, Biquadratic, Bounds, ClampEvent, Cubic, Evaluation,
        Extrapolation, InterpolatorOptions, LinearTableInterpolator, PerformanceCurve1D,
        PerformanceCurve2D, PerformanceTable, PerformanceTable1D, Quadratic,
    };
}
