//! Numerical algorithms.
//!
//! - [`solvers`]: Root-finding algorithms used by the implied volatility engine

pub mod solvers;
