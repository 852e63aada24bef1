//! Result types of the implied volatility solver.

use std::fmt;

/// Outcome of an implied volatility solve.
///
/// Each failure keeps its own variant so a caller can tell a stale quote
/// ([`Unreachable`](Self::Unreachable)) from a numerically hard one
/// ([`NonConvergent`](Self::NonConvergent)) or from bad data
/// ([`InvalidInput`](Self::InvalidInput)). A solved volatility of exactly
/// zero is `Value(0.0)`, never a failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VolatilityEstimate {
    /// Finite, non-negative implied volatility.
    Value(f64),
    /// Price outside the no-arbitrage interval; no volatility reaches it.
    Unreachable {
        /// Target price.
        price: f64,
        /// Lower no-arbitrage bound.
        lower: f64,
        /// Upper no-arbitrage bound.
        upper: f64,
    },
    /// Bracketing, root finding and the Newton fallback all failed.
    NonConvergent,
    /// Target price not positive and finite.
    InvalidInput(String),
}

impl VolatilityEstimate {
    /// Returns the volatility if the solve succeeded.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(sigma) => Some(*sigma),
            _ => None,
        }
    }

    /// Returns `true` if the solve produced a volatility.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for VolatilityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(sigma) => write!(f, "{:.8}", sigma),
            Self::Unreachable {
                price,
                lower,
                upper,
            } => write!(
                f,
                "unreachable: price {} outside no-arbitrage bounds [{}, {}]",
                price, lower, upper
            ),
            Self::NonConvergent => write!(f, "non-convergent"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

/// States of the solver.
///
/// `Rejected`, `ZeroVol`, `Solved` and `Unsolvable` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolverPhase {
    /// Input failed validation or lies outside the bounds.
    Rejected,
    /// Price sits on the lower bound; σ = 0.
    ZeroVol,
    /// Searching for a sign change of the objective.
    Bracketing,
    /// Brent's method on a confirmed bracket.
    RootFinding,
    /// Bounded Newton iteration after bracketing failed.
    NewtonFallback,
    /// A volatility was found.
    Solved,
    /// Every phase was exhausted.
    Unsolvable,
}

impl fmt::Display for SolverPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rejected => "rejected",
            Self::ZeroVol => "zero-vol",
            Self::Bracketing => "bracketing",
            Self::RootFinding => "root-finding",
            Self::NewtonFallback => "newton-fallback",
            Self::Solved => "solved",
            Self::Unsolvable => "unsolvable",
        };
        f.write_str(name)
    }
}

/// Diagnostics of a single solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveReport {
    /// The result.
    pub estimate: VolatilityEstimate,
    /// Phases visited, in order, ending with a terminal phase.
    pub phases: Vec<SolverPhase>,
    /// Number of oracle price evaluations.
    pub evaluations: usize,
    /// Number of bracket expansions performed.
    pub expansions: usize,
}

impl SolveReport {
    /// Returns the terminal phase.
    #[inline]
    pub fn final_phase(&self) -> Option<SolverPhase> {
        self.phases.last().copied()
    }

    /// Returns `true` if the given phase was visited.
    #[inline]
    pub fn visited(&self, phase: SolverPhase) -> bool {
        self.phases.contains(&phase)
    }
}
