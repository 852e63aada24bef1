//! Analytical pricing for European options.
//!
//! This module provides:
//! - Black-Scholes closed-form prices and vega, with continuous dividend yield
//! - The [`PricingOracle`] trait consumed by the implied volatility solver
//! - No-arbitrage price bounds
//! - Standard normal distribution functions

pub mod black_scholes;
pub mod bounds;
pub mod distributions;
pub mod error;
pub mod oracle;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use bounds::{no_arbitrage_bounds, PriceBounds};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use oracle::{BlackScholesOracle, PricingOracle};
