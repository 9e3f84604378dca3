//! Sampled performance data on one or two independent variables.
//!
//! A [`PerformanceTable`] stores `f(x, y)` on the rectangular grid
//! `axis_1 × axis_2`.  Values are row-major with the outer index running
//! over `axis_1`:
//!
//! ```text
//! values[i * axis_2.len() + j] = f(axis_1[i], axis_2[j])
//! ```
//!
//! All structural checks happen in the constructors; a table that exists is
//! valid and never changes afterwards.

use pc_core::{ensure_table, Axis, Error, Real, Result, Size};

use crate::interpolations::Bounds;

/// Check that `samples` is a usable independent axis: at least two points,
/// all finite, strictly increasing.
fn validate_axis(name: &str, samples: &[Real]) -> Result<()> {
    ensure_table!(
        samples.len() >= 2,
        "{name} needs at least 2 samples, got {}",
        samples.len()
    );
    if let Some(k) = samples.iter().position(|s| !s.is_finite()) {
        return Err(Error::MalformedTable(format!(
            "{name}[{k}] is not finite ({})",
            samples[k]
        )));
    }
    for (k, w) in samples.windows(2).enumerate() {
        ensure_table!(
            w[0] < w[1],
            "{name} must be strictly increasing: {name}[{k}] = {} is not below {name}[{}] = {}",
            w[0],
            k + 1,
            w[1]
        );
    }
    Ok(())
}

fn validate_values(values: &[Real]) -> Result<()> {
    if let Some(k) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::MalformedTable(format!(
            "dependent value [{k}] is not finite ({})",
            values[k]
        )));
    }
    Ok(())
}

// ── Two independent variables ─────────────────────────────────────────────────

/// A performance characteristic sampled on a rectangular grid.
///
/// Typical content is a COP or capacity modifier sampled over indoor and
/// outdoor temperature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTable", into = "RawTable")
)]
pub struct PerformanceTable {
    axis_1: Vec<Real>,
    axis_2: Vec<Real>,
    values: Vec<Real>,
}

impl PerformanceTable {
    /// Build a table from its two independent axes and the row-major
    /// dependent values.
    ///
    /// # Errors
    /// [`pc_core::Error::MalformedTable`] if either axis has fewer than two
    /// samples, is not strictly increasing, or holds a non-finite value; if
    /// `values.len() != axis_1.len() * axis_2.len()`; or if any dependent
    /// value is non-finite.
    pub fn new(axis_1: Vec<Real>, axis_2: Vec<Real>, values: Vec<Real>) -> Result<Self> {
        validate_axis("independent_axis_1", &axis_1)?;
        validate_axis("independent_axis_2", &axis_2)?;
        let expected = axis_1.len() * axis_2.len();
        ensure_table!(
            values.len() == expected,
            "expected {} * {} = {expected} dependent values, got {}",
            axis_1.len(),
            axis_2.len(),
            values.len()
        );
        validate_values(&values)?;
        Ok(Self {
            axis_1,
            axis_2,
            values,
        })
    }

    /// Build a table from one row per `axis_1` sample, each row holding one
    /// value per `axis_2` sample.
    pub fn from_rows(axis_1: Vec<Real>, axis_2: Vec<Real>, rows: &[Vec<Real>]) -> Result<Self> {
        ensure_table!(
            rows.len() == axis_1.len(),
            "expected {} rows, got {}",
            axis_1.len(),
            rows.len()
        );
        if let Some(i) = rows.iter().position(|r| r.len() != axis_2.len()) {
            return Err(Error::MalformedTable(format!(
                "row {i} has {} values, expected {}",
                rows[i].len(),
                axis_2.len()
            )));
        }
        let values = rows.iter().flatten().copied().collect();
        Self::new(axis_1, axis_2, values)
    }

    /// Samples of the first independent variable.
    pub fn axis_1(&self) -> &[Real] {
        &self.axis_1
    }

    /// Samples of the second independent variable.
    pub fn axis_2(&self) -> &[Real] {
        &self.axis_2
    }

    /// Samples along `axis`.
    pub fn axis(&self, axis: Axis) -> &[Real] {
        match axis {
            Axis::X => &self.axis_1,
            Axis::Y => &self.axis_2,
        }
    }

    /// Flat row-major dependent values.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Grid shape as `(axis_1.len(), axis_2.len())`.
    pub fn shape(&self) -> (Size, Size) {
        (self.axis_1.len(), self.axis_2.len())
    }

    /// Value at grid node `(axis_1[i], axis_2[j])`, or `None` off the grid.
    pub fn value_at(&self, i: Size, j: Size) -> Option<Real> {
        let (n1, n2) = self.shape();
        (i < n1 && j < n2).then(|| self.values[i * n2 + j])
    }

    /// Sampled range of the first independent variable.
    pub fn axis_1_bounds(&self) -> Bounds {
        Bounds::of_samples(&self.axis_1)
    }

    /// Sampled range of the second independent variable.
    pub fn axis_2_bounds(&self) -> Bounds {
        Bounds::of_samples(&self.axis_2)
    }

    /// The same function with its independent variables swapped, so that
    /// `t.value_at(j, i) == self.value_at(i, j)`.
    pub fn transpose(&self) -> Self {
        let (n1, n2) = self.shape();
        let mut values = Vec::with_capacity(self.values.len());
        for j in 0..n2 {
            for i in 0..n1 {
                values.push(self.values[i * n2 + j]);
            }
        }
        Self {
            axis_1: self.axis_2.clone(),
            axis_2: self.axis_1.clone(),
            values,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawTable {
    independent_axis_1: Vec<Real>,
    independent_axis_2: Vec<Real>,
    dependent_values: Vec<Real>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for PerformanceTable {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        Self::new(
            raw.independent_axis_1,
            raw.independent_axis_2,
            raw.dependent_values,
        )
    }
}

#[cfg(feature = "serde")]
impl From<PerformanceTable> for RawTable {
    fn from(table: PerformanceTable) -> Self {
        Self {
            independent_axis_1: table.axis_1,
            independent_axis_2: table.axis_2,
            dependent_values: table.values,
        }
    }
}

// ── One independent variable ──────────────────────────────────────────────────

/// A performance characteristic sampled along a single independent
/// variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTable1D", into = "RawTable1D")
)]
pub struct PerformanceTable1D {
    axis: Vec<Real>,
    values: Vec<Real>,
}

impl PerformanceTable1D {
    /// Build a table from sorted samples and one value per sample.
    pub fn new(axis: Vec<Real>, values: Vec<Real>) -> Result<Self> {
        validate_axis("independent_axis", &axis)?;
        ensure_table!(
            values.len() == axis.len(),
            "expected {} dependent values, got {}",
            axis.len(),
            values.len()
        );
        validate_values(&values)?;
        Ok(Self { axis, values })
    }

    /// Samples of the independent variable.
    pub fn axis(&self) -> &[Real] {
        &self.axis
    }

    /// Dependent values, one per sample.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Sampled range of the independent variable.
    pub fn bounds(&self) -> Bounds {
        Bounds::of_samples(&self.axis)
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawTable1D {
    independent_axis: Vec<Real>,
    dependent_values: Vec<Real>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable1D> for PerformanceTable1D {
    type Error = Error;

    fn try_from(raw: RawTable1D) -> Result<Self> {
        Self::new(raw.independent_axis, raw.dependent_values)
    }
}

#[cfg(feature = "serde")]
impl From<PerformanceTable1D> for RawTable1D {
    fn from(table: PerformanceTable1D) -> Self {
        Self {
            independent_axis: table.axis,
            dependent_values: table.values,
        }
    }
}
