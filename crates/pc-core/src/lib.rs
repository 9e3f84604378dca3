//! # pc-core
//!
//! Core types and error definitions for perf-curves.
//!
//! This crate holds what every other crate in the workspace shares: the
//! numeric type aliases, the [`Axis`] tag naming an independent variable,
//! and the error hierarchy with its `ensure!` / `ensure_table!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Independent-variable tags.
pub mod axis;

/// Error types and the `ensure!` / `ensure_table!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use axis::Axis;
pub use errors::{Error, Result};
