// Closed-form Black-Scholes prices for European calls and puts with a
// continuous dividend yield. This is the only implementation of the formula in
// the crate: the checked `price` entry point and the grid sweep both call it.
//
// Nothing here validates its inputs. With σ = 0 or T = 0 the d1 term divides by
// zero and the resulting inf/NaN flows straight through to the caller.

use crate::models::utils::norm_cdf;

/// Risk-adjusted log-moneyness terms `(d1, d2)`.
///
/// ```text
/// d1 = (ln(S/K) + T·(r − q + σ²/2)) / (σ·√T)
/// d2 = d1 − σ·√T
/// ```
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, sigma: f64, r: f64, T: f64, q: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + T * (r - q + 0.5 * sigma * sigma)) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Theoretical price of a European call under Black-Scholes assumptions.
///
/// * `S` - underlying price (31.55 means $31.55)
/// * `K` - strike price
/// * `sigma` - volatility (0.50 means 50%)
/// * `r` - continuously compounded risk-free rate
/// * `T` - time to expiration in years
/// * `q` - continuously compounded dividend yield, 0.0 when not applicable
#[allow(non_snake_case)]
pub fn call_price(S: f64, K: f64, sigma: f64, r: f64, T: f64, q: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, sigma, r, T, q);
    S * (-q * T).exp() * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Theoretical price of a European put under Black-Scholes assumptions.
///
/// Arguments are in the same order as [`call_price`].
#[allow(non_snake_case)]
pub fn put_price(S: f64, K: f64, sigma: f64, r: f64, T: f64, q: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, sigma, r, T, q);
    K * (-r * T).exp() * norm_cdf(-d2) - S * (-q * T).exp() * norm_cdf(-d1)
}
