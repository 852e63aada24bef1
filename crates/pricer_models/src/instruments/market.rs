//! Market parameters for a single European option.

use super::error::InstrumentError;

/// Market inputs for pricing and implied volatility inversion.
///
/// Holds spot, strike, continuously compounded risk-free rate, continuous
/// dividend yield and time to maturity in years. Construction validates
/// `spot > 0`, `strike > 0` and `expiry > 0` (all finite), and finite
/// rate and dividend yield; an existing value is therefore always usable
/// by the pricing formulas.
///
/// # Examples
/// ```
/// use pricer_models::instruments::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 95.0, 0.05, 0.02, 1.0).unwrap();
/// assert_eq!(market.strike(), 95.0);
/// assert!((market.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// assert!(MarketParameters::new(100.0, 95.0, 0.05, 0.02, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Spot price (S), positive
    /// * `strike` - Strike price (K), positive
    /// * `rate` - Risk-free rate (r), annualised, any finite value
    /// * `dividend_yield` - Continuous dividend yield (q), any finite value
    /// * `expiry` - Time to maturity in years (T), positive
    ///
    /// # Errors
    /// The matching [`InstrumentError`] variant for the first invalid input.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        expiry: f64,
    ) -> Result<Self, InstrumentError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(InstrumentError::InvalidSpot { spot });
        }

        if !(strike > 0.0 && strike.is_finite()) {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if !(expiry > 0.0 && expiry.is_finite()) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("risk-free rate must be finite, got {}", rate),
            });
        }

        if !dividend_yield.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("dividend yield must be finite, got {}", dividend_yield),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            dividend_yield,
            expiry,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Risk-free discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor e^(−qT).
    #[inline]
    pub fn dividend_discount_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }

    /// S·e^(−qT)
    #[inline]
    pub fn discounted_spot(&self) -> f64 {
        self.spot * self.dividend_discount_factor()
    }

    /// K·e^(−rT)
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }

    /// Forward price S·e^((r−q)T).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * self.expiry).exp()
    }
}
