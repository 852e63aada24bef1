//! # Pricer Models (L2: Business Logic)
//!
//! Market inputs and closed-form Black-Scholes analytics.
//!
//! This crate provides:
//! - Market parameters and option type definitions (`instruments`)
//! - Standard normal distribution functions
//! - The Black-Scholes pricing oracle (price and vega) behind the
//!   [`PricingOracle`](analytical::PricingOracle) seam
//! - No-arbitrage price bounds
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: `MarketParameters` cannot hold a
//!   non-positive spot, strike or expiry, so downstream code never re-checks
//! - **Pure functions**: every analytic is stateless and thread-safe
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{no_arbitrage_bounds, BlackScholesOracle, PricingOracle};
//! use pricer_models::instruments::{MarketParameters, OptionType};
//!
//! let market = MarketParameters::new(100.0, 100.0, 0.03, 0.01, 0.5).unwrap();
//! let price = BlackScholesOracle.price(&market, OptionType::Call, 0.25);
//!
//! let bounds = no_arbitrage_bounds(&market, OptionType::Call);
//! assert!(bounds.contains(price, 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
