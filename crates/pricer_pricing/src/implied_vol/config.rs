//! Implied volatility solver configuration.

use crate::error::ConfigError;

/// Tunables of the implied volatility solver.
///
/// Every field has a default; use [`ImpliedVolConfig::builder`] to
/// override any subset.
///
/// | Field | Default | Role |
/// |-------|---------|------|
/// | `tolerance` | 1e-8 | Brent x-tolerance and Newton `|f|` tolerance |
/// | `max_iterations` | 100 | Brent iteration cap |
/// | `sigma_lo` / `sigma_hi` | 1e-8 / 5.0 | Initial bracket |
/// | `expand_factor` | 2.0 | Growth of `sigma_hi` per expansion |
/// | `max_sigma` | 10.0 | Ceiling for expansion and Newton iterates |
/// | `max_expansions` | 20 | Expansion attempt cap |
/// | `newton_iterations` | 8 | Newton fallback budget |
/// | `newton_guess` / `newton_guess_short` | 0.2 / 0.3 | Newton start, long / short expiry |
/// | `short_maturity` | 0.1 | Expiry at or below which the short guess is used |
/// | `bound_tolerance` | 1e-12 | Absolute slack on the no-arbitrage bounds |
/// | `vega_floor` | 1e-12 | Vega below which Newton gives up |
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::implied_vol::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::builder()
///     .tolerance(1e-10)
///     .sigma_hi(2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tolerance(), 1e-10);
/// assert_eq!(config.max_sigma(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ImpliedVolConfig {
    tolerance: f64,
    max_iterations: usize,
    sigma_lo: f64,
    sigma_hi: f64,
    expand_factor: f64,
    max_sigma: f64,
    max_expansions: usize,
    newton_iterations: usize,
    newton_guess: f64,
    newton_guess_short: f64,
    short_maturity: f64,
    bound_tolerance: f64,
    vega_floor: f64,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
            sigma_lo: 1e-8,
            sigma_hi: 5.0,
            expand_factor: 2.0,
            max_sigma: 10.0,
            max_expansions: 20,
            newton_iterations: 8,
            newton_guess: 0.2,
            newton_guess_short: 0.3,
            short_maturity: 0.1,
            bound_tolerance: 1e-12,
            vega_floor: 1e-12,
        }
    }
}

impl ImpliedVolConfig {
    /// Creates a builder seeded with the defaults.
    #[inline]
    pub fn builder() -> ImpliedVolConfigBuilder {
        ImpliedVolConfigBuilder::default()
    }

    /// Creates a builder seeded with this configuration.
    #[inline]
    pub fn to_builder(self) -> ImpliedVolConfigBuilder {
        ImpliedVolConfigBuilder { config: self }
    }

    /// Convergence tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Brent iteration cap.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Lower end of the initial bracket.
    #[inline]
    pub fn sigma_lo(&self) -> f64 {
        self.sigma_lo
    }

    /// Upper end of the initial bracket.
    #[inline]
    pub fn sigma_hi(&self) -> f64 {
        self.sigma_hi
    }

    /// Multiplier applied to the upper end on each expansion.
    #[inline]
    pub fn expand_factor(&self) -> f64 {
        self.expand_factor
    }

    /// Hard ceiling on volatility.
    #[inline]
    pub fn max_sigma(&self) -> f64 {
        self.max_sigma
    }

    /// Maximum number of bracket expansions.
    #[inline]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Newton fallback iteration budget; zero disables the fallback.
    #[inline]
    pub fn newton_iterations(&self) -> usize {
        self.newton_iterations
    }

    /// Newton starting guess for expiries above `short_maturity`.
    #[inline]
    pub fn newton_guess(&self) -> f64 {
        self.newton_guess
    }

    /// Newton starting guess for expiries at or below `short_maturity`.
    ///
    /// Defaults above `newton_guess`, following the `0.2 if T > 0.1 else 0.3`
    /// rule rather than shrinking the guess for short expiries.
    #[inline]
    pub fn newton_guess_short(&self) -> f64 {
        self.newton_guess_short
    }

    /// Expiry threshold selecting the Newton starting guess.
    #[inline]
    pub fn short_maturity(&self) -> f64 {
        self.short_maturity
    }

    /// Absolute slack applied to the no-arbitrage bounds.
    #[inline]
    pub fn bound_tolerance(&self) -> f64 {
        self.bound_tolerance
    }

    /// Vega below which the Newton fallback is abandoned.
    #[inline]
    pub fn vega_floor(&self) -> f64 {
        self.vega_floor
    }

    /// Newton starting point for the given expiry, clamped to
    /// `[sigma_lo, max_sigma]`.
    pub fn newton_start(&self, expiry: f64) -> f64 {
        let guess = if expiry > self.short_maturity {
            self.newton_guess
        } else {
            self.newton_guess_short
        };
        guess.min(self.max_sigma).max(self.sigma_lo)
    }

    /// Validates the configuration.
    ///
    /// Needed after deserialisation, which bypasses the builder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::invalid(
                    name,
                    format!("{} must be positive and finite", value),
                ))
            }
        }

        fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::invalid(
                    name,
                    format!("{} must be non-negative and finite", value),
                ))
            }
        }

        positive("tolerance", self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::invalid("max_iterations", "must be > 0"));
        }
        positive("sigma_lo", self.sigma_lo)?;
        positive("sigma_hi", self.sigma_hi)?;
        if self.sigma_lo >= self.sigma_hi {
            return Err(ConfigError::invalid(
                "sigma_hi",
                format!("{} must exceed sigma_lo = {}", self.sigma_hi, self.sigma_lo),
            ));
        }
        positive("expand_factor", self.expand_factor)?;
        if self.expand_factor <= 1.0 {
            return Err(ConfigError::invalid(
                "expand_factor",
                format!("{} must be greater than 1", self.expand_factor),
            ));
        }
        positive("max_sigma", self.max_sigma)?;
        positive("newton_guess", self.newton_guess)?;
        positive("newton_guess_short", self.newton_guess_short)?;
        non_negative("short_maturity", self.short_maturity)?;
        non_negative("bound_tolerance", self.bound_tolerance)?;
        non_negative("vega_floor", self.vega_floor)?;
        Ok(())
    }
}

/// Builder for [`ImpliedVolConfig`].
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolConfigBuilder {
    config: ImpliedVolConfig,
}

macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(mut self, $name: $ty) -> Self {
                self.config.$name = $name;
                self
            }
        )*
    };
}

impl ImpliedVolConfigBuilder {
    setters! {
        /// Sets the convergence tolerance.
        tolerance: f64,
        /// Sets the Brent iteration cap.
        max_iterations: usize,
        /// Sets the lower end of the initial bracket.
        sigma_lo: f64,
        /// Sets the upper end of the initial bracket.
        sigma_hi: f64,
        /// Sets the bracket expansion multiplier.
        expand_factor: f64,
        /// Sets the volatility ceiling.
        max_sigma: f64,
        /// Sets the bracket expansion cap.
        max_expansions: usize,
        /// Sets the Newton fallback budget.
        newton_iterations: usize,
        /// Sets the Newton guess for longer expiries.
        newton_guess: f64,
        /// Sets the Newton guess for short expiries.
        newton_guess_short: f64,
        /// Sets the short-expiry threshold.
        short_maturity: f64,
        /// Sets the slack on the no-arbitrage bounds.
        bound_tolerance: f64,
        /// Sets the vega floor for the Newton fallback.
        vega_floor: f64,
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` for any out-of-range field.
    pub fn build(self) -> Result<ImpliedVolConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImpliedVolConfig::default();
        assert_eq!(config.tolerance(), 1e-8);
        assert_eq!(config.max_iterations(), 100);
        assert_eq!(config.sigma_lo(), 1e-8);
        assert_eq!(config.sigma_hi(), 5.0);
        assert_eq!(config.expand_factor(), 2.0);
        assert_eq!(config.max_sigma(), 10.0);
        assert_eq!(config.max_expansions(), 20);
        assert_eq!(config.newton_iterations(), 8);
        assert_eq!(config.bound_tolerance(), 1e-12);
        assert_eq!(config.vega_floor(), 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_subset() {
        let config = ImpliedVolConfig::builder()
            .max_expansions(0)
            .sigma_hi(0.1)
            .build()
            .unwrap();

        assert_eq!(config.max_expansions(), 0);
        assert_eq!(config.sigma_hi(), 0.1);
        assert_eq!(config.tolerance(), 1e-8);
    }

    #[test]
    fn test_to_builder_keeps_fields() {
        let base = ImpliedVolConfig::builder().sigma_hi(3.0).build().unwrap();
        let config = base.to_builder().tolerance(1e-12).build().unwrap();
        assert_eq!(config.sigma_hi(), 3.0);
        assert_eq!(config.tolerance(), 1e-12);
    }

    #[test]
    fn test_newton_start() {
        let config = ImpliedVolConfig::default();
        assert_eq!(config.newton_start(1.0), 0.2);
        assert_eq!(config.newton_start(0.1), 0.3);
        assert_eq!(config.newton_start(0.05), 0.3);

        let clamped = ImpliedVolConfig::builder()
            .max_sigma(0.15)
            .sigma_hi(0.1)
            .build()
            .unwrap();
        assert_eq!(clamped.newton_start(1.0), 0.15);
    }

    #[test]
    fn test_invalid_tolerance() {
        for tol in [0.0, -1e-8, f64::NAN] {
            let result = ImpliedVolConfig::builder().tolerance(tol).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "tolerance",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_invalid_bracket() {
        let result = ImpliedVolConfig::builder().sigma_lo(1.0).sigma_hi(0.5).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "sigma_hi",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_expand_factor() {
        let result = ImpliedVolConfig::builder().expand_factor(1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "expand_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_max_iterations() {
        let result = ImpliedVolConfig::builder().max_iterations(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_newton_iterations_allowed() {
        let config = ImpliedVolConfig::builder()
            .newton_iterations(0)
            .build()
            .unwrap();
        assert_eq!(config.newton_iterations(), 0);
    }
}
