//! Monte Carlo estimator for European options.
//!
//! Terminal prices are sampled from the exact risk-neutral lognormal law,
//! so a single step per path suffices:
//!
//! ```text
//! S_T = S · exp((r - q - σ²/2)·T + σ·√T·Z)
//! ```
//!
//! The price is the discounted sample mean of the payoffs; the standard
//! error is the discounted unbiased (n−1) sample standard deviation over
//! √n, with n the effective sample size including antithetic partners.

use pricer_models::instruments::{MarketParameters, OptionType};
use tracing::debug;

use super::config::MonteCarloConfig;
use crate::error::ConfigError;
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloResult {
    /// Discounted sample mean of the payoffs.
    pub price: f64,
    /// Standard error of the price estimate (non-negative).
    pub std_error: f64,
    /// Effective sample size behind the estimate.
    pub n_samples: usize,
}

impl MonteCarloResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Single-shot Monte Carlo estimator.
///
/// The estimator holds only configuration. Each call to
/// [`estimate`](Self::estimate) builds its own [`PricerRng`], so one
/// estimator can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEstimator};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let estimator = MonteCarloEstimator::new(config).unwrap();
///
/// let market = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0).unwrap();
/// let result = estimator.estimate(&market, OptionType::Call, 0.2).unwrap();
///
/// assert!((result.price - 10.4506).abs() < 4.0 * result.std_error);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloEstimator {
    config: MonteCarloConfig,
}

impl MonteCarloEstimator {
    /// Creates a new estimator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Estimates the price of a European option at the given volatility.
    ///
    /// With a configured seed the result is bit-for-bit reproducible.
    /// Without one, a fresh seed is drawn and logged at `debug` level.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if `volatility` is negative
    /// or not finite.
    pub fn estimate(
        &self,
        market: &MarketParameters,
        option: OptionType,
        volatility: f64,
    ) -> Result<MonteCarloResult, ConfigError> {
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ConfigError::invalid(
                "volatility",
                format!("{} must be non-negative and finite", volatility),
            ));
        }

        let mut rng = match self.config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };

        let n_paths = self.config.n_paths();
        let n_samples = self.config.n_samples();
        debug!(
            seed = rng.seed(),
            n_paths,
            n_samples,
            antithetic = self.config.antithetic(),
            %option,
            "monte carlo estimate started"
        );

        let mut normals = vec![0.0; n_paths];
        rng.fill_normal(&mut normals);

        let expiry = market.expiry();
        let drift = (market.rate() - market.dividend_yield() - 0.5 * volatility * volatility) * expiry;
        let diffusion = volatility * expiry.sqrt();
        let spot = market.spot();
        let strike = market.strike();

        let payoff = |z: f64| option.payoff(spot * (drift + diffusion * z).exp(), strike);

        let mut payoffs = Vec::with_capacity(n_samples);
        payoffs.extend(normals.iter().map(|&z| payoff(z)));
        if self.config.antithetic() {
            payoffs.extend(normals.iter().map(|&z| payoff(-z)));
        }

        let (mean, std_dev) = sample_moments(&payoffs);
        let discount_factor = market.discount_factor();

        let result = MonteCarloResult {
            price: mean * discount_factor,
            std_error: std_dev / (n_samples as f64).sqrt() * discount_factor,
            n_samples,
        };

        debug!(
            price = result.price,
            std_error = result.std_error,
            "monte carlo estimate finished"
        );

        Ok(result)
    }
}

/// Sample mean and unbiased (n−1) standard deviation; two-pass for accuracy.
fn sample_moments(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

/// Estimates a European option price in one call.
///
/// Convenience wrapper around [`MonteCarloEstimator`]: `n_paths` normal
/// draws, doubled when `antithetic` is set, seeded by `seed` when given.
///
/// # Errors
///
/// Returns `ConfigError` for an invalid path count, fewer than two
/// effective samples, or a negative or non-finite volatility.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionType};
/// use pricer_pricing::mc::estimate;
///
/// let market = MarketParameters::new(100.0, 110.0, 0.03, 0.01, 0.5).unwrap();
/// let a = estimate(&market, OptionType::Put, 0.25, 10_000, true, Some(123)).unwrap();
/// let b = estimate(&market, OptionType::Put, 0.25, 10_000, true, Some(123)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn estimate(
    market: &MarketParameters,
    option: OptionType,
    volatility: f64,
    n_paths: usize,
    antithetic: bool,
    seed: Option<u64>,
) -> Result<MonteCarloResult, ConfigError> {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .antithetic(antithetic)
        .build()?
        .with_seed(seed);

    MonteCarloEstimator::new(config)?.estimate(market, option, volatility)
}
