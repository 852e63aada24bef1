//! Price command implementation
//!
//! Closed-form Black-Scholes price and vega, with the no-arbitrage bounds
//! the implied volatility solver checks against.

use pricer_models::analytical::{no_arbitrage_bounds, BlackScholes};
use pricer_models::instruments::{MarketParameters, OptionType};
use tracing::info;

use crate::Result;

/// Run the price command
pub fn run(market: &MarketParameters, option: OptionType, volatility: f64) -> Result<()> {
    info!(?market, %option, volatility, "pricing");

    let model = BlackScholes::from_market(market, volatility)?;
    let price = model.price(option, market.strike(), market.expiry());
    let vega = model.vega(market.strike(), market.expiry());
    let bounds = no_arbitrage_bounds(market, option);

    println!("Black-Scholes {} (σ = {})", option, volatility);
    println!("  Price:  {:.6}", price);
    println!("  Vega:   {:.6}", vega);
    println!("  Bounds: [{:.6}, {:.6}]", bounds.lower, bounds.upper);
    Ok(())
}
