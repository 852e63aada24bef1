//! # Pricer Pricing (Layer 3: Engines)
//!
//! Numerical engines built on the Layer 2 pricing oracle:
//!
//! - [`implied_vol`]: implied volatility solver (bound check, adaptive
//!   bracketing, Brent, Newton fallback) with a tagged result
//! - [`mc`]: Monte Carlo estimator with antithetic variates and an
//!   unbiased standard error
//! - [`rng`]: seedable, explicitly owned random number generation
//!
//! All engines are synchronous and hold no state between calls; callers
//! may run them in parallel freely. Reproducible Monte Carlo requires an
//! explicit seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
//! use pricer_models::instruments::{MarketParameters, OptionType};
//! use pricer_pricing::implied_vol::implied_volatility;
//! use pricer_pricing::mc::estimate;
//!
//! let market = MarketParameters::new(100.0, 100.0, 0.05, 0.02, 1.0).unwrap();
//!
//! // Invert a closed-form price
//! let price = BlackScholesOracle.price(&market, OptionType::Call, 0.2);
//! let sigma = implied_volatility(price, &market, OptionType::Call);
//! assert!((sigma.value().unwrap() - 0.2).abs() < 1e-6);
//!
//! // Cross-check with Monte Carlo
//! let mc = estimate(&market, OptionType::Call, 0.2, 50_000, true, Some(42)).unwrap();
//! assert!((mc.price - price).abs() < 4.0 * mc.std_error);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Deserialise [`ImpliedVolConfig`](implied_vol::ImpliedVolConfig)
//!   and [`MonteCarloConfig`](mc::MonteCarloConfig); serialise results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod implied_vol;
pub mod mc;
pub mod rng;

pub use error::ConfigError;
