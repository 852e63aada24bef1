//! Implied volatility inversion.
//!
//! Turns an observed option price into the Black-Scholes volatility that
//! reproduces it, robustly across the whole input domain:
//!
//! 1. **Admission**: reject non-positive prices and prices outside the
//!    no-arbitrage bounds; a price on the lower bound is σ = 0
//! 2. **Bracketing**: grow `[sigma_lo, sigma_hi]` until the objective
//!    changes sign
//! 3. **Root finding**: Brent's method on the bracket
//! 4. **Newton fallback**: bounded Newton iteration when no bracket is found
//!
//! Outcomes are reported as a [`VolatilityEstimate`]; nothing here panics
//! or returns NaN.

mod config;
mod estimate;
mod solver;

pub use config::{ImpliedVolConfig, ImpliedVolConfigBuilder};
pub use estimate::{SolveReport, SolverPhase, VolatilityEstimate};
pub use solver::{implied_volatility, ImpliedVolSolver};
