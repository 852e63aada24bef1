//! Error types for engine configuration.
//!
//! Solver outcomes (unreachable price, non-convergence) are not errors:
//! they are carried by [`VolatilityEstimate`](crate::implied_vol::VolatilityEstimate).
//! [`ConfigError`] covers only parameters a caller should never have passed.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the implied volatility solver and the Monte
/// Carlo estimator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Fewer than two samples; the unbiased variance is undefined.
    #[error("Insufficient samples {0}: at least 2 are needed for a standard error")]
    InsufficientSamples(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
