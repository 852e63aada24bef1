//! Monte Carlo command implementation
//!
//! Prints the estimate next to the closed form so the two can be checked
//! against each other.

use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
use pricer_models::instruments::{MarketParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEstimator};
use tracing::info;

use crate::Result;

/// Run the Monte Carlo command
pub fn run(
    market: &MarketParameters,
    option: OptionType,
    volatility: f64,
    config: &MonteCarloConfig,
) -> Result<()> {
    info!(
        n_paths = config.n_paths(),
        antithetic = config.antithetic(),
        seed = ?config.seed(),
        "running monte carlo"
    );

    let estimator = MonteCarloEstimator::new(config.clone())?;
    let result = estimator.estimate(market, option, volatility)?;
    let closed = BlackScholesOracle.price(market, option, volatility);

    println!("Monte Carlo {} (σ = {})", option, volatility);
    println!("  Price:       {:.6} ± {:.6}", result.price, result.std_error);
    println!("  95% CI:      ± {:.6}", result.confidence_95());
    println!("  Samples:     {}", result.n_samples);
    println!("  Closed form: {:.6}", closed);
    if result.std_error > 0.0 {
        println!(
            "  Error / SE:  {:.3}",
            (result.price - closed).abs() / result.std_error
        );
    }
    Ok(())
}
