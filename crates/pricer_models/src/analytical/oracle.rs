//! Pricing oracle abstraction used by the implied volatility solver.
//!
//! The solver only ever needs two things from a model: a price as a
//! function of volatility and its first derivative. [`PricingOracle`]
//! captures exactly that so alternative closed forms can be plugged in.

use super::black_scholes::BlackScholes;
use super::bounds::no_arbitrage_bounds;
use crate::instruments::{MarketParameters, OptionType};

/// Price and vega as functions of volatility for fixed market parameters.
///
/// Implementations must be deterministic, return a price that is
/// non-decreasing in `volatility`, and return a non-negative vega.
pub trait PricingOracle {
    /// Option price at the given volatility.
    fn price(&self, market: &MarketParameters, option: OptionType, volatility: f64) -> f64;

    /// Derivative of the price with respect to volatility.
    fn vega(&self, market: &MarketParameters, volatility: f64) -> f64;
}

/// Closed-form Black-Scholes oracle.
///
/// Volatility zero (or below) prices at the discounted intrinsic value,
/// which is the lower no-arbitrage bound; vega there is zero.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
/// use pricer_models::instruments::{MarketParameters, OptionType};
///
/// let market = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0).unwrap();
/// let price = BlackScholesOracle.price(&market, OptionType::Call, 0.2);
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesOracle;

impl BlackScholesOracle {
    #[inline]
    fn model(market: &MarketParameters, volatility: f64) -> BlackScholes {
        BlackScholes::new_unchecked(
            market.spot(),
            market.rate(),
            market.dividend_yield(),
            volatility,
        )
    }
}

impl PricingOracle for BlackScholesOracle {
    fn price(&self, market: &MarketParameters, option: OptionType, volatility: f64) -> f64 {
        if volatility.is_nan() {
            return f64::NAN;
        }
        if volatility <= 0.0 {
            return no_arbitrage_bounds(market, option).lower;
        }

        Self::model(market, volatility).price(option, market.strike(), market.expiry())
    }

    fn vega(&self, market: &MarketParameters, volatility: f64) -> f64 {
        if volatility.is_nan() {
            return f64::NAN;
        }
        if volatility <= 0.0 {
            return 0.0;
        }

        Self::model(market, volatility).vega(market.strike(), market.expiry())
    }
}
