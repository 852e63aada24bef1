//! Implied volatility command implementation

use pricer_models::instruments::{MarketParameters, OptionType};
use pricer_pricing::implied_vol::{ImpliedVolConfig, ImpliedVolSolver, VolatilityEstimate};
use tracing::info;

use crate::Result;

/// Run the implied volatility command
///
/// An unsolvable price is a normal outcome and is reported, not raised.
pub fn run(
    price: f64,
    market: &MarketParameters,
    option: OptionType,
    config: &ImpliedVolConfig,
) -> Result<()> {
    info!(price, ?market, %option, "solving implied volatility");

    let solver = ImpliedVolSolver::new(*config)?;
    let report = solver.solve_with_report(price, market, option);

    let phases: Vec<String> = report.phases.iter().map(|p| p.to_string()).collect();

    match &report.estimate {
        VolatilityEstimate::Value(sigma) => println!("Implied volatility: {:.8}", sigma),
        other => println!("No valid implied volatility: {}", other),
    }
    println!("  Phases:      {}", phases.join(" -> "));
    println!("  Evaluations: {}", report.evaluations);
    println!("  Expansions:  {}", report.expansions);
    Ok(())
}
