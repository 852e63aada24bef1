//! Model-free no-arbitrage bounds for European options.

use crate::instruments::{MarketParameters, OptionType};

/// Closed interval of prices attainable without arbitrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    /// Price at zero volatility (discounted intrinsic value).
    pub lower: f64,
    /// Price as volatility tends to infinity.
    pub upper: f64,
}

impl PriceBounds {
    /// Returns `true` if `price` lies in `[lower - eps, upper + eps]`.
    #[inline]
    pub fn contains(&self, price: f64, eps: f64) -> bool {
        price >= self.lower - eps && price <= self.upper + eps
    }

    /// Returns `true` if `price` is within `eps` of the lower bound.
    #[inline]
    pub fn is_at_lower(&self, price: f64, eps: f64) -> bool {
        (price - self.lower).abs() < eps
    }
}

/// Computes the no-arbitrage price interval.
///
/// With `Sd = S·e^(-qT)` and `Kd = K·e^(-rT)`:
/// - Call: `[max(Sd - Kd, 0), Sd]`
/// - Put: `[max(Kd - Sd, 0), Kd]`
///
/// # Examples
/// ```
/// use pricer_models::analytical::no_arbitrage_bounds;
/// use pricer_models::instruments::{MarketParameters, OptionType};
///
/// let market = MarketParameters::new(100.0, 100.0, 0.0, 0.0, 1.0).unwrap();
/// let bounds = no_arbitrage_bounds(&market, OptionType::Call);
/// assert_eq!(bounds.lower, 0.0);
/// assert_eq!(bounds.upper, 100.0);
/// ```
pub fn no_arbitrage_bounds(market: &MarketParameters, option: OptionType) -> PriceBounds {
    let discounted_spot = market.discounted_spot();
    let discounted_strike = market.discounted_strike();

    match option {
        OptionType::Call => PriceBounds {
            lower: (discounted_spot - discounted_strike).max(0.0),
            upper: discounted_spot,
        },
        OptionType::Put => PriceBounds {
            lower: (discounted_strike - discounted_spot).max(0.0),
            upper: discounted_strike,
        },
    }
}
