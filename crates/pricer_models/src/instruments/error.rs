//! Instrument error types.
//!
//! This module provides structured error handling for market parameter
//! construction and option type parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive or not finite
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidExpiry`: Time to maturity is non-positive or not finite
/// - `InvalidParameter`: Rate or dividend yield is not finite
/// - `UnknownOptionType`: Option type tag is neither call nor put
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },

    /// Unrecognised option type tag.
    #[error("Unknown option type '{tag}': expected 'call' or 'put'")]
    UnknownOptionType {
        /// The rejected tag
        tag: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InstrumentError::InvalidSpot { spot: 0.0 }.to_string(),
            "Invalid spot: S = 0"
        );
        assert_eq!(
            InstrumentError::InvalidExpiry { expiry: -1.0 }.to_string(),
            "Invalid expiry: T = -1"
        );
        assert_eq!(
            InstrumentError::UnknownOptionType {
                tag: "straddle".to_string()
            }
            .to_string(),
            "Unknown option type 'straddle': expected 'call' or 'put'"
        );
    }

    #[test]
    fn test_to_pricing_error() {
        let err: PricingError = InstrumentError::InvalidStrike { strike: -5.0 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("strike")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
