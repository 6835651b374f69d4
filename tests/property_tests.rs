//! Property-based tests over random valid inputs.

use heatmap_lib::models::utils::parity_value;
use heatmap_lib::{call_price, linspace, put_price, sweep, AxisBinding, InputField, OptionInputs};
use proptest::prelude::*;

proptest! {
    /// C − P = S·e^(−qT) − K·e^(−rT) for every valid parameter set.
    #[test]
    fn put_call_parity_holds(
        s in 1.0_f64..500.0,
        k in 1.0_f64..500.0,
        sigma in 0.01_f64..2.0,
        r in 0.0_f64..0.15,
        t in 0.01_f64..10.0,
        q in 0.0_f64..0.10,
    ) {
        let diff = call_price(s, k, sigma, r, t, q) - put_price(s, k, sigma, r, t, q);
        let expected = parity_value(s, k, r, t, q);
        prop_assert!((diff - expected).abs() < 1e-6, "diff={} expected={}", diff, expected);
    }

    /// Raising S raises the call and lowers the put. Ranges keep Φ(±d) away
    /// from underflow, where both sides would be exactly zero.
    #[test]
    fn monotone_in_underlying(
        s in 50.0_f64..150.0,
        bump in 0.5_f64..20.0,
        k in 50.0_f64..150.0,
        sigma in 0.2_f64..1.0,
        t in 0.25_f64..3.0,
    ) {
        let (r, q) = (0.03, 0.01);
        prop_assert!(call_price(s + bump, k, sigma, r, t, q) > call_price(s, k, sigma, r, t, q));
        prop_assert!(put_price(s + bump, k, sigma, r, t, q) < put_price(s, k, sigma, r, t, q));
    }

    /// Raising σ raises both prices.
    #[test]
    fn monotone_in_volatility(
        s in 50.0_f64..150.0,
        k in 50.0_f64..150.0,
        sigma in 0.1_f64..1.0,
        bump in 0.05_f64..0.5,
        t in 0.25_f64..3.0,
    ) {
        let (r, q) = (0.03, 0.01);
        prop_assert!(call_price(s, k, sigma + bump, r, t, q) > call_price(s, k, sigma, r, t, q));
        prop_assert!(put_price(s, k, sigma + bump, r, t, q) > put_price(s, k, sigma, r, t, q));
    }

    /// linspace hits both endpoints exactly and is non-decreasing.
    #[test]
    fn linspace_endpoints(min in -100.0_f64..100.0, width in 0.001_f64..100.0, n in 2_usize..50) {
        let max = min + width;
        let xs = linspace(min, max, n);
        prop_assert_eq!(xs.len(), n);
        prop_assert_eq!(xs[0], min);
        prop_assert_eq!(xs[n - 1], max);
        prop_assert!(xs.windows(2).all(|w| w[1] >= w[0]));
    }

    /// Sweep grids are always n x n.
    #[test]
    fn sweep_shape(n in 2_usize..16) {
        let baseline = OptionInputs::new(100.0, 100.0, 0.2, 0.05, 1.0);
        let x = AxisBinding::new(InputField::Strike, 80.0, 120.0);
        let y = AxisBinding::new(InputField::TimeToExpiration, 0.1, 2.0);
        let out = sweep(&baseline, &x, &y, n).unwrap();
        prop_assert_eq!(out.x_samples.len(), n);
        prop_assert_eq!(out.y_samples.len(), n);
        prop_assert_eq!(out.call.size(), n);
        prop_assert_eq!(out.put.size(), n);
    }
}
