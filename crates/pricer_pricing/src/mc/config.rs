//! Monte Carlo estimator configuration.

use crate::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 100_000;

/// Monte Carlo estimator configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .antithetic(true)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_samples(), 20_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MonteCarloConfig {
    /// Number of independent normal draws.
    n_paths: usize,
    /// Whether each draw is paired with its negation.
    antithetic: bool,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            antithetic: true,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of independent normal draws.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns whether antithetic variates are enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the effective sample size: `2 · n_paths` with antithetic
    /// variates, `n_paths` otherwise.
    #[inline]
    pub fn n_samples(&self) -> usize {
        if self.antithetic {
            2 * self.n_paths
        } else {
            self.n_paths
        }
    }

    /// Returns a copy with the seed replaced.
    #[inline]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - the effective sample size is below 2
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_samples() < 2 {
            return Err(ConfigError::InsufficientSamples(self.n_samples()));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take the defaults: 100 000 paths, antithetic variates on,
/// no seed.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    antithetic: Option<bool>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of independent normal draws.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = Some(antithetic);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the path count is out of range or the
    /// effective sample size is below 2.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let defaults = MonteCarloConfig::default();
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            antithetic: self.antithetic.unwrap_or(defaults.antithetic),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();

        assert_eq!(config.n_paths(), DEFAULT_PATHS);
        assert!(config.antithetic());
        assert_eq!(config.seed(), None);
        assert_eq!(config, MonteCarloConfig::default());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_n_samples() {
        let anti = MonteCarloConfig::builder().n_paths(500).build().unwrap();
        assert_eq!(anti.n_samples(), 1000);

        let plain = MonteCarloConfig::builder()
            .n_paths(500)
            .antithetic(false)
            .build()
            .unwrap();
        assert_eq!(plain.n_samples(), 500);
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_single_path_needs_antithetic() {
        let result = MonteCarloConfig::builder()
            .n_paths(1)
            .antithetic(false)
            .build();
        assert!(matches!(result, Err(ConfigError::InsufficientSamples(1))));

        // Paired with its negation, one draw gives two samples
        let config = MonteCarloConfig::builder().n_paths(1).build().unwrap();
        assert_eq!(config.n_samples(), 2);
    }

    #[test]
    fn test_with_seed() {
        let config = MonteCarloConfig::default().with_seed(Some(7));
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.with_seed(None).seed(), None);
    }
}
