//! CLI configuration management
//!
//! Configuration is layered, highest priority last:
//! 1. Default values
//! 2. TOML file (`ivol.toml` unless `--config` says otherwise)
//! 3. Environment variables (`IVOL_*`)
//! 4. Command-line flags
//!
//! ```toml
//! log_level = "info"
//!
//! [solver]
//! tolerance = 1e-10
//! max_sigma = 8.0
//!
//! [monte_carlo]
//! n_paths = 200000
//! antithetic = true
//! seed = 42
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_pricing::implied_vol::ImpliedVolConfig;
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "IVOL_LOG_LEVEL";
/// Environment variable overriding the Monte Carlo path count.
pub const ENV_MC_PATHS: &str = "IVOL_MC_PATHS";
/// Environment variable overriding the Monte Carlo seed.
pub const ENV_MC_SEED: &str = "IVOL_MC_SEED";
/// Environment variable overriding the solver tolerance.
pub const ENV_TOLERANCE: &str = "IVOL_TOLERANCE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error(transparent)]
    Engine(#[from] pricer_pricing::ConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Implied volatility solver settings
    pub solver: ImpliedVolConfig,
    /// Monte Carlo settings
    pub monte_carlo: MonteCarloConfig,
}

/// Command-line overrides (flags take precedence over everything else)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Log level override
    pub log_level: Option<String>,
    /// Solver tolerance override
    pub tolerance: Option<f64>,
    /// Monte Carlo path count override
    pub n_paths: Option<usize>,
    /// Monte Carlo seed override
    pub seed: Option<u64>,
    /// Disable antithetic variates
    pub no_antithetic: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(paths) = lookup(ENV_MC_PATHS) {
            let n_paths = paths.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a path count", ENV_MC_PATHS, paths))
            })?;
            self.set_n_paths(n_paths)?;
        }

        if let Some(seed) = lookup(ENV_MC_SEED) {
            let seed = seed.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a u64 seed", ENV_MC_SEED, seed))
            })?;
            self.monte_carlo = self.monte_carlo.clone().with_seed(Some(seed));
        }

        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            let tolerance = tolerance.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a number", ENV_TOLERANCE, tolerance))
            })?;
            self.solver = self.solver.to_builder().tolerance(tolerance).build()?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(tolerance) = cli.tolerance {
            self.solver = self.solver.to_builder().tolerance(tolerance).build()?;
        }
        if let Some(n_paths) = cli.n_paths {
            self.set_n_paths(n_paths)?;
        }
        if let Some(seed) = cli.seed {
            self.monte_carlo = self.monte_carlo.clone().with_seed(Some(seed));
        }
        if cli.no_antithetic {
            self.monte_carlo = MonteCarloConfig::builder()
                .n_paths(self.monte_carlo.n_paths())
                .antithetic(false)
                .build()?
                .with_seed(self.monte_carlo.seed());
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;
        self.monte_carlo.validate()?;
        Ok(())
    }

    fn set_n_paths(&mut self, n_paths: usize) -> Result<(), ConfigError> {
        self.monte_carlo = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .antithetic(self.monte_carlo.antithetic())
            .build()?
            .with_seed(self.monte_carlo.seed());
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (skipped when absent)
/// 4. Default values
pub fn build_config(config_file: &Path, cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = if config_file.exists() {
        CliConfig::from_file(config_file)?
    } else {
        CliConfig::default()
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.solver, ImpliedVolConfig::default());
        assert_eq!(config.monte_carlo.n_paths(), 100_000);
        assert!(config.monte_carlo.antithetic());
        assert_eq!(config.monte_carlo.seed(), None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [solver]
            tolerance = 1e-10
            max_sigma = 8.0

            [monte_carlo]
            n_paths = 200000
            antithetic = false
            seed = 42
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.solver.tolerance(), 1e-10);
        assert_eq!(config.solver.max_sigma(), 8.0);
        assert_eq!(config.solver.sigma_hi(), 5.0);
        assert_eq!(config.monte_carlo.n_paths(), 200_000);
        assert!(!config.monte_carlo.antithetic());
        assert_eq!(config.monte_carlo.seed(), Some(42));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = CliConfig::from_toml("[monte_carlo]\nseed = 7\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.monte_carlo.seed(), Some(7));
        assert_eq!(config.monte_carlo.n_paths(), 100_000);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(CliConfig::from_toml("log_level = \"loud\"").is_err());
        assert!(CliConfig::from_toml("[solver]\ntolerance = -1.0").is_err());
        assert!(CliConfig::from_toml("[monte_carlo]\nn_paths = 0").is_err());
        assert!(CliConfig::from_toml("[solver]\nunknown = 1").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                (ENV_LOG_LEVEL, "info"),
                (ENV_MC_PATHS, "5000"),
                (ENV_MC_SEED, "123"),
                (ENV_TOLERANCE, "1e-9"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.monte_carlo.n_paths(), 5000);
        assert_eq!(config.monte_carlo.seed(), Some(123));
        assert_eq!(config.solver.tolerance(), 1e-9);
    }

    #[test]
    fn test_env_invalid_values() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(ENV_MC_PATHS, "many")])),
            Err(ConfigError::EnvError(_))
        ));
        assert!(matches!(
            config.apply_env(env(&[(ENV_MC_PATHS, "0")])),
            Err(ConfigError::Engine(_))
        ));
        assert!(config.apply_env(env(&[(ENV_TOLERANCE, "0")])).is_err());
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = CliConfig::from_toml("[monte_carlo]\nn_paths = 1000\nseed = 1\n").unwrap();
        config.apply_env(env(&[(ENV_MC_SEED, "2")])).unwrap();

        let cli = CliOverrides {
            log_level: Some("error".to_string()),
            tolerance: Some(1e-6),
            n_paths: None,
            seed: Some(3),
            no_antithetic: true,
        };
        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.solver.tolerance(), 1e-6);
        assert_eq!(config.monte_carlo.n_paths(), 1000);
        assert_eq!(config.monte_carlo.seed(), Some(3));
        assert!(!config.monte_carlo.antithetic());
    }

    #[test]
    fn test_build_config_without_file() {
        let cli = CliOverrides {
            n_paths: Some(2500),
            ..Default::default()
        };
        let config = build_config(Path::new("does-not-exist.toml"), &cli).unwrap();
        assert_eq!(config.monte_carlo.n_paths(), 2500);
    }
}
