//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model with a continuous dividend
//! yield for pricing European call and put options, plus vega, the only
//! sensitivity the implied volatility solver needs.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//! **Vega**: S·e^(-qT)·√T·φ(d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{MarketParameters, OptionType};

/// Expiries at or below this are treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `dividend_yield` - Continuous dividend yield (annualised)
    /// * `volatility` - Volatility (must be positive and finite)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.0, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.0).is_err());
    /// ```
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self::new_unchecked(spot, rate, dividend_yield, volatility))
    }

    /// Creates a model from validated market parameters.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    pub fn from_market(market: &MarketParameters, volatility: f64) -> Result<Self, AnalyticalError> {
        Self::new(market.spot(), market.rate(), market.dividend_yield(), volatility)
    }

    /// Skips validation; callers guarantee positive spot.
    #[inline]
    pub(super) fn new_unchecked(spot: f64, rate: f64, dividend_yield: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
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

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// Returns ±100 (or 0 at the money) once the option has expired.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discounted_spot = self.spot * (-self.dividend_yield * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        discounted_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discounted_spot = self.spot * (-self.dividend_yield * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        discounted_strike * norm_cdf(-d2) - discounted_spot * norm_cdf(-d1)
    }

    /// Prices a call or put.
    #[inline]
    pub fn price(&self, option: OptionType, strike: f64, expiry: f64) -> f64 {
        match option {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁), the same for calls and puts and
    /// always non-negative.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        self.spot * (-self.dividend_yield * expiry).exp() * sqrt_t * norm_pdf(d1)
    }
}
