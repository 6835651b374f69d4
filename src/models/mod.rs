pub mod bs;

/// Numeric helpers shared by the pricing code
pub mod utils {
    /// Standard normal cumulative distribution function.
    ///
    /// Written as 0.5 * erfc(-x / sqrt(2)), which equals 0.5 * [1 + erf(x / sqrt(2))]
    /// but keeps full relative precision in the lower tail.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Call payoff at expiry: max(S - K, 0)
    pub fn call_payoff(spot: f64, strike: f64) -> f64 {
        (spot - strike).max(0.0)
    }

    /// Put payoff at expiry: max(K - S, 0)
    pub fn put_payoff(spot: f64, strike: f64) -> f64 {
        (strike - spot).max(0.0)
    }

    /// Forward-discounted parity value S·e^(−qT) − K·e^(−rT) that C − P must equal.
    #[allow(non_snake_case)]
    pub fn parity_value(S: f64, K: f64, r: f64, T: f64, q: f64) -> f64 {
        S * (-q * T).exp() - K * (-r * T).exp()
    }
}
