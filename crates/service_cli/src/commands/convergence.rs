//! Convergence command implementation
//!
//! Runs the Monte Carlo estimator over log-spaced path counts with one
//! seed and tabulates the error against the closed form. The error should
//! stay within a few standard errors, and the standard error should fall
//! like 1/√n.

use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
use pricer_models::instruments::{MarketParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEstimator, MAX_PATHS};
use tracing::info;

use crate::{CliError, Result};

/// Seed used when neither the configuration nor the flags provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Path-count sweep
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    /// Smallest path count
    pub min_paths: usize,
    /// Largest path count
    pub max_paths: usize,
    /// Number of log-spaced points, endpoints included
    pub points: usize,
}

/// One row of the convergence table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRow {
    /// Path count
    pub n_paths: usize,
    /// Monte Carlo price
    pub price: f64,
    /// Reported standard error
    pub std_error: f64,
    /// Absolute error against the closed form
    pub error: f64,
}

impl Sweep {
    /// Log-spaced path counts from `min_paths` to `max_paths`
    pub fn path_counts(&self) -> Result<Vec<usize>> {
        if self.min_paths == 0 || self.max_paths > MAX_PATHS || self.min_paths > self.max_paths {
            return Err(CliError::InvalidArgument(format!(
                "path range [{}, {}] must satisfy 1 <= min <= max <= {}",
                self.min_paths, self.max_paths, MAX_PATHS
            )));
        }
        if self.points < 2 {
            return Err(CliError::InvalidArgument(format!(
                "need at least 2 points, got {}",
                self.points
            )));
        }

        let lo = (self.min_paths as f64).ln();
        let hi = (self.max_paths as f64).ln();
        let steps = (self.points - 1) as f64;

        Ok((0..self.points)
            .map(|i| {
                let n = (lo + (hi - lo) * i as f64 / steps).exp().round() as usize;
                n.clamp(self.min_paths, self.max_paths)
            })
            .collect())
    }
}

/// Compute the convergence table
pub fn convergence_table(
    market: &MarketParameters,
    option: OptionType,
    volatility: f64,
    sweep: &Sweep,
    config: &MonteCarloConfig,
) -> Result<Vec<ConvergenceRow>> {
    let closed = BlackScholesOracle.price(market, option, volatility);
    let seed = config.seed().unwrap_or(DEFAULT_SEED);

    sweep
        .path_counts()?
        .into_iter()
        .map(|n_paths| -> Result<ConvergenceRow> {
            let config = MonteCarloConfig::builder()
                .n_paths(n_paths)
                .antithetic(config.antithetic())
                .seed(seed)
                .build()?;
            let result = MonteCarloEstimator::new(config)?.estimate(market, option, volatility)?;
            Ok(ConvergenceRow {
                n_paths,
                price: result.price,
                std_error: result.std_error,
                error: (result.price - closed).abs(),
            })
        })
        .collect()
}

/// Run the convergence command
pub fn run(
    market: &MarketParameters,
    option: OptionType,
    volatility: f64,
    sweep: &Sweep,
    config: &MonteCarloConfig,
) -> Result<()> {
    info!(?sweep, "running convergence sweep");

    let rows = convergence_table(market, option, volatility, sweep, config)?;
    let closed = BlackScholesOracle.price(market, option, volatility);

    println!("Closed form {} price: {:.6}", option, closed);
    println!("\n┌────────────┬────────────┬────────────┬────────────┐");
    println!("│ Paths      │ MC Price   │ Std Error  │ |Error|    │");
    println!("├────────────┼────────────┼────────────┼────────────┤");
    for row in &rows {
        println!(
            "│ {:<10} │ {:<10.6} │ {:<10.6} │ {:<10.6} │",
            row.n_paths, row.price, row.std_error, row.error
        );
    }
    println!("└────────────┴────────────┴────────────┴────────────┘");
    Ok(())
}
