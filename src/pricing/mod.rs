//! Checked single-point pricing.
//!
//! [`price`] validates an [`OptionInputs`] before calling the raw formulas in
//! [`crate::models::bs`], and turns a non-finite result into
//! [`PricingError::NumericDegenerate`] instead of handing it back silently.

pub mod types;

pub use types::*;

use crate::error::{PricingError, Result};
use crate::models::bs::{call_price, put_price};

/// Evaluate both formulas for `inputs` without validation.
///
/// This is what the grid sweep calls for every cell; non-finite values are
/// returned as-is.
pub fn evaluate(inputs: &OptionInputs) -> OptionPrices {
    let OptionInputs {
        underlying: s,
        strike: k,
        volatility: sigma,
        risk_free_rate: r,
        dividend_yield: q,
        time_to_expiration: t,
    } = *inputs;

    OptionPrices {
        call: call_price(s, k, sigma, r, t, q),
        put: put_price(s, k, sigma, r, t, q),
    }
}

/// Reject prices that are infinite or NaN.
pub(crate) fn ensure_finite(prices: &OptionPrices, context: impl FnOnce() -> String) -> Result<()> {
    if prices.call.is_finite() && prices.put.is_finite() {
        return Ok(());
    }
    Err(PricingError::numeric_degenerate(format!(
        "{} produced call={} put={}",
        context(),
        prices.call,
        prices.put
    )))
}

/// Price a European call and put.
///
/// # Errors
///
/// * [`PricingError::InvalidInput`] if S, K, σ or T is not strictly positive, or
///   any input is non-finite
/// * [`PricingError::NumericDegenerate`] if the formula still produces a
///   non-finite price (e.g. overflow at extreme inputs)
///
/// # Example
///
/// ```rust
/// use heatmap_lib::{price, OptionInputs};
///
/// let inputs = OptionInputs::new(31.55, 22.75, 0.5, 0.05, 3.5).with_dividend_yield(0.05);
/// let prices = price(&inputs)?;
/// assert!((prices.call - 12.3547).abs() < 1e-4);
/// assert!((prices.put - 4.9675).abs() < 1e-4);
/// # Ok::<(), heatmap_lib::PricingError>(())
/// ```
pub fn price(inputs: &OptionInputs) -> Result<OptionPrices> {
    inputs.validate()?;
    let prices = evaluate(inputs);
    ensure_finite(&prices, || format!("pricing {:?}", inputs))?;
    Ok(prices)
}
