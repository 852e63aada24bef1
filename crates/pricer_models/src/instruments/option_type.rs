//! Option type definitions.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// European option type.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Terminal payoff for the given underlying price and strike.
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoffs() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.payoff(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_parse_unknown_tag() {
        match "digital".parse::<OptionType>() {
            Err(InstrumentError::UnknownOptionType { tag }) => assert_eq!(tag, "digital"),
            other => panic!("Expected UnknownOptionType, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips() {
        for option in [OptionType::Call, OptionType::Put] {
            assert_eq!(option.to_string().parse::<OptionType>().unwrap(), option);
        }
    }
}
