//! CLI error types

use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the command line.
///
/// Solver outcomes such as an unreachable price are printed, not raised;
/// only malformed input and configuration end up here.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Market parameters or option type rejected.
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Model parameters rejected.
    #[error("Model error: {0}")]
    Analytical(#[from] AnalyticalError),

    /// Engine configuration rejected.
    #[error("Engine error: {0}")]
    Engine(#[from] pricer_pricing::ConfigError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
