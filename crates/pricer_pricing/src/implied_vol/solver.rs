//! Implied volatility solver.
//!
//! The solver is a small state machine:
//!
//! ```text
//!            ┌──────────┐  bad price / outside bounds
//!  input ──▶ │  admit   │ ─────────────────────────────▶ Rejected
//!            └────┬─────┘  price on lower bound
//!                 │        ─────────────────────────────▶ ZeroVol
//!                 ▼
//!            Bracketing ──── sign change ────▶ RootFinding ──▶ Solved | Unsolvable
//!                 │
//!                 └──── no sign change ──────▶ NewtonFallback ──▶ Solved | Unsolvable
//! ```
//!
//! Price is strictly increasing in σ, so once a sign change of
//! `f(σ) = price(σ) - target` is found the root inside it is unique.

use std::cell::Cell;

use pricer_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_models::analytical::{no_arbitrage_bounds, BlackScholesOracle, PricingOracle};
use pricer_models::instruments::{MarketParameters, OptionType};
use tracing::debug;

use super::config::ImpliedVolConfig;
use super::estimate::{SolveReport, SolverPhase, VolatilityEstimate};
use crate::error::ConfigError;

/// Internal solver state; terminal states carry the result.
enum State {
    Bracketing,
    RootFinding { lo: f64, hi: f64 },
    NewtonFallback,
    Done(SolverPhase, VolatilityEstimate),
}

impl State {
    fn phase(&self) -> SolverPhase {
        match self {
            State::Bracketing => SolverPhase::Bracketing,
            State::RootFinding { .. } => SolverPhase::RootFinding,
            State::NewtonFallback => SolverPhase::NewtonFallback,
            State::Done(phase, _) => *phase,
        }
    }
}

/// Implied volatility solver over a [`PricingOracle`].
///
/// The solver is stateless between calls and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
/// use pricer_models::instruments::{MarketParameters, OptionType};
/// use pricer_pricing::implied_vol::{ImpliedVolSolver, VolatilityEstimate};
///
/// let market = MarketParameters::new(100.0, 100.0, 0.03, 0.01, 0.5).unwrap();
/// let price = BlackScholesOracle.price(&market, OptionType::Call, 0.25);
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let sigma = solver.solve(price, &market, OptionType::Call).value().unwrap();
/// assert!((sigma - 0.25).abs() < 1e-6);
///
/// // Above the upper bound S·e^(-qT) no volatility reproduces the price
/// let too_high = market.discounted_spot() + 1.0;
/// assert!(matches!(
///     solver.solve(too_high, &market, OptionType::Call),
///     VolatilityEstimate::Unreachable { .. }
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<O = BlackScholesOracle> {
    config: ImpliedVolConfig,
    oracle: O,
}

impl Default for ImpliedVolSolver<BlackScholesOracle> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ImpliedVolSolver<BlackScholesOracle> {
    /// Creates a Black-Scholes solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ImpliedVolConfig::default(),
            oracle: BlackScholesOracle,
        }
    }

    /// Creates a Black-Scholes solver with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: ImpliedVolConfig) -> Result<Self, ConfigError> {
        Self::with_oracle(config, BlackScholesOracle)
    }
}

impl<O: PricingOracle> ImpliedVolSolver<O> {
    /// Creates a solver over a custom pricing oracle.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_oracle(config: ImpliedVolConfig, oracle: O) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, oracle })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Solves for the volatility reproducing `price`.
    ///
    /// Never panics and never returns NaN: every failure is a distinct
    /// [`VolatilityEstimate`] variant.
    pub fn solve(
        &self,
        price: f64,
        market: &MarketParameters,
        option: OptionType,
    ) -> VolatilityEstimate {
        self.solve_with_report(price, market, option).estimate
    }

    /// Solves for the volatility and reports the phases visited.
    pub fn solve_with_report(
        &self,
        price: f64,
        market: &MarketParameters,
        option: OptionType,
    ) -> SolveReport {
        let evaluations = Cell::new(0_usize);
        let mut expansions = 0;
        let mut phases = Vec::with_capacity(4);

        let objective = |sigma: f64| {
            evaluations.set(evaluations.get() + 1);
            self.oracle.price(market, option, sigma) - price
        };

        let mut state = self.admit(price, market, option);
        loop {
            let phase = state.phase();
            phases.push(phase);
            debug!(%phase, price, %option, "implied volatility phase");

            state = match state {
                State::Bracketing => self.bracket(&objective, &mut expansions),
                State::RootFinding { lo, hi } => self.find_root(&objective, lo, hi),
                State::NewtonFallback => self.newton(&objective, market),
                State::Done(_, estimate) => {
                    debug!(
                        %estimate,
                        evaluations = evaluations.get(),
                        expansions,
                        "implied volatility solve finished"
                    );
                    return SolveReport {
                        estimate,
                        phases,
                        evaluations: evaluations.get(),
                        expansions,
                    };
                }
            };
        }
    }

    /// Input and bound checks; no oracle calls.
    fn admit(&self, price: f64, market: &MarketParameters, option: OptionType) -> State {
        if !(price > 0.0 && price.is_finite()) {
            return State::Done(
                SolverPhase::Rejected,
                VolatilityEstimate::InvalidInput(format!(
                    "price must be positive and finite, got {}",
                    price
                )),
            );
        }

        let bounds = no_arbitrage_bounds(market, option);
        let eps = self.config.bound_tolerance();

        if !bounds.contains(price, eps) {
            return State::Done(
                SolverPhase::Rejected,
                VolatilityEstimate::Unreachable {
                    price,
                    lower: bounds.lower,
                    upper: bounds.upper,
                },
            );
        }

        if bounds.is_at_lower(price, eps) {
            return State::Done(SolverPhase::ZeroVol, VolatilityEstimate::Value(0.0));
        }

        State::Bracketing
    }

    /// Grows the upper end until the objective changes sign.
    fn bracket<F>(&self, objective: &F, expansions: &mut usize) -> State
    where
        F: Fn(f64) -> f64,
    {
        let config = &self.config;
        let lo = config.sigma_lo();
        let mut hi = config.sigma_hi();
        let f_lo = objective(lo);
        let mut f_hi = objective(hi);

        while !brackets(f_lo, f_hi)
            && hi < config.max_sigma()
            && *expansions < config.max_expansions()
        {
            hi *= config.expand_factor();
            f_hi = objective(hi);
            *expansions += 1;
            debug!(lo, hi, f_lo, f_hi, "bracket expanded");
        }

        if brackets(f_lo, f_hi) {
            State::RootFinding { lo, hi }
        } else if config.newton_iterations() > 0 {
            debug!(lo, hi, f_lo, f_hi, "no sign change, falling back to newton");
            State::NewtonFallback
        } else {
            State::Done(SolverPhase::Unsolvable, VolatilityEstimate::NonConvergent)
        }
    }

    fn find_root<F>(&self, objective: &F, lo: f64, hi: f64) -> State
    where
        F: Fn(f64) -> f64,
    {
        let solver = BrentSolver::new(SolverConfig::new(
            self.config.tolerance(),
            self.config.max_iterations(),
        ));

        match solver.find_root(objective, lo, hi) {
            Ok(sigma) => solved(sigma),
            Err(err) => {
                debug!(error = %err, lo, hi, "brent failed");
                State::Done(SolverPhase::Unsolvable, VolatilityEstimate::NonConvergent)
            }
        }
    }

    fn newton<F>(&self, objective: &F, market: &MarketParameters) -> State
    where
        F: Fn(f64) -> f64,
    {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(
            self.config.tolerance(),
            self.config.newton_iterations(),
        ))
        .with_derivative_floor(self.config.vega_floor());

        let start = self.config.newton_start(market.expiry());
        let vega = |sigma: f64| self.oracle.vega(market, sigma);

        match solver.find_root_bounded(objective, vega, start, 0.0, self.config.max_sigma()) {
            Ok(sigma) => solved(sigma),
            Err(err) => {
                debug!(error = %err, start, "newton fallback failed");
                State::Done(SolverPhase::Unsolvable, VolatilityEstimate::NonConvergent)
            }
        }
    }
}

/// `true` when both values are valid and differ in sign (or one is zero).
#[inline]
fn brackets(f_lo: f64, f_hi: f64) -> bool {
    f_lo.is_finite() && f_hi.is_finite() && f_lo * f_hi <= 0.0
}

#[inline]
fn solved(sigma: f64) -> State {
    if sigma.is_finite() && sigma >= 0.0 {
        State::Done(SolverPhase::Solved, VolatilityEstimate::Value(sigma))
    } else {
        State::Done(SolverPhase::Unsolvable, VolatilityEstimate::NonConvergent)
    }
}

/// Solves for implied volatility with the default configuration and the
/// Black-Scholes oracle.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{MarketParameters, OptionType};
/// use pricer_pricing::implied_vol::implied_volatility;
///
/// let market = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0).unwrap();
/// let sigma = implied_volatility(10.4506, &market, OptionType::Call);
/// assert!((sigma.value().unwrap() - 0.2).abs() < 1e-4);
/// ```
pub fn implied_volatility(
    price: f64,
    market: &MarketParameters,
    option: OptionType,
) -> VolatilityEstimate {
    ImpliedVolSolver::with_defaults().solve(price, market, option)
}
