//! Property tests for the Black-Scholes oracle and no-arbitrage bounds.

use approx::assert_relative_eq;
use pricer_models::analytical::{no_arbitrage_bounds, BlackScholesOracle, PricingOracle};
use pricer_models::instruments::{MarketParameters, OptionType};
use proptest::prelude::*;

#[test]
fn test_put_call_parity_reference() {
    let m = MarketParameters::new(100.0, 100.0, 0.05, 0.02, 1.0).unwrap();
    let call = BlackScholesOracle.price(&m, OptionType::Call, 0.2);
    let put = BlackScholesOracle.price(&m, OptionType::Put, 0.2);

    assert_relative_eq!(
        call - put,
        m.discounted_spot() - m.discounted_strike(),
        epsilon = 1e-8
    );
}

#[test]
fn test_bounds_are_volatility_limits() {
    let m = MarketParameters::new(100.0, 95.0, 0.04, 0.01, 0.75).unwrap();

    for option in [OptionType::Call, OptionType::Put] {
        let bounds = no_arbitrage_bounds(&m, option);
        let near_zero = BlackScholesOracle.price(&m, option, 1e-6);
        let huge = BlackScholesOracle.price(&m, option, 50.0);

        assert_relative_eq!(near_zero, bounds.lower, epsilon = 1e-9);
        assert_relative_eq!(huge, bounds.upper, epsilon = 1e-6);
    }
}

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 10.0..300.0_f64,
        strike in 10.0..300.0_f64,
        rate in -0.02..0.1_f64,
        dividend in 0.0..0.08_f64,
        expiry in 0.01..5.0_f64,
        vol in 0.01..2.0_f64,
    ) {
        let m = MarketParameters::new(spot, strike, rate, dividend, expiry).unwrap();
        let call = BlackScholesOracle.price(&m, OptionType::Call, vol);
        let put = BlackScholesOracle.price(&m, OptionType::Put, vol);
        let parity = m.discounted_spot() - m.discounted_strike();

        prop_assert!((call - put - parity).abs() < 1e-8, "C-P={} parity={}", call - put, parity);
    }

    #[test]
    fn prop_vega_non_negative(
        spot in 10.0..300.0_f64,
        strike in 10.0..300.0_f64,
        expiry in 0.01..5.0_f64,
        vol in 0.0..5.0_f64,
    ) {
        let m = MarketParameters::new(spot, strike, 0.03, 0.01, expiry).unwrap();
        prop_assert!(BlackScholesOracle.vega(&m, vol) >= 0.0);
    }
}
