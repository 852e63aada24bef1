//! Option inputs.
//!
//! - [`MarketParameters`]: validated spot, strike, rates and expiry
//! - [`OptionType`]: call or put, with the exact terminal payoff
//! - [`InstrumentError`]: construction and parsing failures

mod error;
mod market;
mod option_type;

pub use error::InstrumentError;
pub use market::MarketParameters;
pub use option_type::OptionType;
