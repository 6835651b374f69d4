use crate::error::{PricingError, Result};
use crate::pricing::InputField;

/// Binds a sweep axis to one input field over a closed range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBinding {
    /// Field overwritten by this axis' samples
    pub field: InputField,
    /// Lower bound (first sample)
    pub min: f64,
    /// Upper bound (last sample)
    pub max: f64,
}

impl AxisBinding {
    pub fn new(field: InputField, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Checks bound finiteness, `min < max`, and that the whole range lies in the
    /// field's domain.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "{} axis bounds must be finite, got [{}, {}]",
                self.field, self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(PricingError::invalid_input(format!(
                "{} axis min must be < max, got min={} max={}",
                self.field, self.min, self.max
            )));
        }
        // max > min, so checking min covers the whole range
        self.field.check_value(self.min)
    }
}

/// Square grid of prices indexed `[i][j]`, `i` along X and `j` along Y.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    values: Vec<Vec<f64>>,
}

impl PriceGrid {
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            values: vec![vec![0.0; n]; n],
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i][j] = value;
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Price at X sample `i`, Y sample `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Rows in X order; each row runs along Y.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// `(min, max)` over every cell.
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// Result of a two-dimensional sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepOutput {
    pub x_axis: AxisBinding,
    pub y_axis: AxisBinding,
    /// X sample values, `x_samples[i]` labels row `i`
    pub x_samples: Vec<f64>,
    /// Y sample values, `y_samples[j]` labels column `j`
    pub y_samples: Vec<f64>,
    pub call: PriceGrid,
    pub put: PriceGrid,
}

impl SweepOutput {
    pub fn sample_count(&self) -> usize {
        self.x_samples.len()
    }
}
