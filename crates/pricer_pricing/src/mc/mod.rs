//! Monte Carlo estimation of European option prices.
//!
//! Used to cross-check the closed-form oracle: the estimate should sit
//! within a few standard errors of the Black-Scholes price, and the
//! standard error should shrink like 1/√n.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEstimator
//! ├── MonteCarloConfig  (path count, antithetic flag, seed)
//! ├── PricerRng         (owned per call, never global)
//! └── estimate()
//!     ├── exact lognormal terminal draw
//!     ├── payoff
//!     └── discounted mean + unbiased standard error
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{MarketParameters, OptionType};
//! use pricer_pricing::mc::estimate;
//!
//! let market = MarketParameters::new(100.0, 100.0, 0.05, 0.02, 1.0).unwrap();
//! let result = estimate(&market, OptionType::Call, 0.2, 20_000, true, Some(42)).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

mod config;
mod estimator;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, MAX_PATHS};
pub use estimator::{estimate, MonteCarloEstimator, MonteCarloResult};
