use tracing::{debug, warn};

use super::types::{AxisBinding, PriceGrid, SweepOutput};
use crate::error::{PricingError, Result};
use crate::pricing::{ensure_finite, evaluate, OptionInputs};

/// Default samples per axis (10 x 10 cells).
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// `n` evenly spaced values over `[min, max]`, both endpoints included.
///
/// The last value is set to `max` exactly rather than accumulated, so
/// `linspace(a, b, n)[n - 1] == b` holds bit for bit.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|k| min + step * k as f64).collect();
            values[n - 1] = max;
            values
        }
    }
}

/// Check everything [`sweep`] needs before evaluating a single cell.
pub fn validate_sweep(
    baseline: &OptionInputs,
    x_axis: &AxisBinding,
    y_axis: &AxisBinding,
    sample_count: usize,
) -> Result<()> {
    if sample_count < 2 {
        return Err(PricingError::invalid_input(format!(
            "sample count must be >= 2, got {}",
            sample_count
        )));
    }
    if x_axis.field == y_axis.field {
        return Err(PricingError::invalid_input(format!(
            "x and y axes must bind different fields, both bind {}",
            x_axis.field
        )));
    }
    x_axis.validate()?;
    y_axis.validate()?;
    baseline.validate_except(&[x_axis.field, y_axis.field])
}

/// Evaluate call and put prices over the cross product of two axes.
///
/// For each `(i, j)` the baseline is copied, the X field is overwritten with
/// `x_samples[i]`, then the Y field with `y_samples[j]`, and both prices are
/// stored at `[i][j]`. The four fields not bound to an axis keep their baseline
/// values.
///
/// # Errors
///
/// * [`PricingError::InvalidInput`] if `sample_count < 2`, both axes bind the
///   same field, an axis range is empty or outside its field's domain, or a
///   non-axis baseline field is invalid
/// * [`PricingError::NumericDegenerate`] if any cell evaluates to inf/NaN
///
/// # Example
///
/// ```rust
/// use heatmap_lib::{sweep, AxisBinding, InputField, OptionInputs};
///
/// let baseline = OptionInputs::new(100.0, 100.0, 0.2, 0.05, 1.0);
/// let x = AxisBinding::new(InputField::Underlying, 80.0, 120.0);
/// let y = AxisBinding::new(InputField::Volatility, 0.1, 0.5);
///
/// let out = sweep(&baseline, &x, &y, 10)?;
/// assert_eq!(out.x_samples.len(), 10);
/// assert_eq!(out.call.size(), 10);
/// # Ok::<(), heatmap_lib::PricingError>(())
/// ```
pub fn sweep(
    baseline: &OptionInputs,
    x_axis: &AxisBinding,
    y_axis: &AxisBinding,
    sample_count: usize,
) -> Result<SweepOutput> {
    validate_sweep(baseline, x_axis, y_axis, sample_count)?;

    let x_samples = linspace(x_axis.min, x_axis.max, sample_count);
    let y_samples = linspace(y_axis.min, y_axis.max, sample_count);

    let mut call = PriceGrid::zeros(sample_count);
    let mut put = PriceGrid::zeros(sample_count);

    for (i, &x) in x_samples.iter().enumerate() {
        let row_inputs = baseline.with(x_axis.field, x);
        for (j, &y) in y_samples.iter().enumerate() {
            let cell_inputs = row_inputs.with(y_axis.field, y);
            let prices = evaluate(&cell_inputs);
            if let Err(err) = ensure_finite(&prices, || {
                format!("cell [{}][{}] ({}={}, {}={})", i, j, x_axis.field, x, y_axis.field, y)
            }) {
                warn!(i, j, x, y, "degenerate sweep cell");
                return Err(err);
            }
            call.set(i, j, prices.call);
            put.set(i, j, prices.put);
        }
    }

    debug!(
        n = sample_count,
        x_field = %x_axis.field,
        y_field = %y_axis.field,
        "sweep complete"
    );

    Ok(SweepOutput {
        x_axis: *x_axis,
        y_axis: *y_axis,
        x_samples,
        y_samples,
        call,
        put,
    })
}
