//! ivol - Command Line Black-Scholes Pricing and Implied Volatility
//!
//! # Commands
//!
//! - `ivol price` - Closed-form price, vega and no-arbitrage bounds
//! - `ivol iv --price <p>` - Implied volatility with solver diagnostics
//! - `ivol mc` - Monte Carlo price with standard error, checked against the
//!   closed form
//! - `ivol convergence` - Monte Carlo error over log-spaced path counts
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate is a thin presentation
//! layer: it parses input, layers configuration, and prints what the
//! pricing crates return.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricer_models::instruments::{MarketParameters, OptionType};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};

/// Black-Scholes pricing, implied volatility and Monte Carlo checks
#[derive(Parser)]
#[command(name = "ivol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (ignored when absent)
    #[arg(short, long, global = true, default_value = "ivol.toml")]
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Market inputs shared by every command
#[derive(Args, Debug, Clone)]
struct MarketArgs {
    /// Spot price (S)
    #[arg(short = 's', long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price (K)
    #[arg(short = 'k', long, default_value_t = 100.0)]
    strike: f64,

    /// Risk-free rate (r), continuously compounded
    #[arg(short = 'r', long, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,

    /// Dividend yield (q), continuous
    #[arg(short = 'q', long, default_value_t = 0.0, allow_negative_numbers = true)]
    dividend: f64,

    /// Time to expiry in years (T)
    #[arg(short = 't', long, default_value_t = 1.0)]
    expiry: f64,

    /// Option type (call or put)
    #[arg(short = 'o', long = "option", default_value = "call")]
    option: String,
}

impl MarketArgs {
    fn market(&self) -> Result<MarketParameters> {
        Ok(MarketParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend,
            self.expiry,
        )?)
    }

    fn option_type(&self) -> Result<OptionType> {
        Ok(self.option.parse()?)
    }
}

/// Monte Carlo flags shared by `mc` and `convergence`
#[derive(Args, Debug, Clone, Default)]
struct McArgs {
    /// RNG seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Disable antithetic variates
    #[arg(long)]
    no_antithetic: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form Black-Scholes price, vega and bounds
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Volatility (σ)
        #[arg(long = "vol", default_value_t = 0.2)]
        volatility: f64,
    },

    /// Implied volatility from an observed price
    Iv {
        #[command(flatten)]
        market: MarketArgs,

        /// Observed option price
        #[arg(short, long)]
        price: f64,

        /// Convergence tolerance override
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Monte Carlo price with standard error
    Mc {
        #[command(flatten)]
        market: MarketArgs,

        /// Volatility (σ)
        #[arg(long = "vol", default_value_t = 0.2)]
        volatility: f64,

        /// Number of Monte Carlo paths (before antithetic doubling)
        #[arg(short = 'n', long)]
        paths: Option<usize>,

        #[command(flatten)]
        mc: McArgs,
    },

    /// Monte Carlo error against the closed form over path counts
    Convergence {
        #[command(flatten)]
        market: MarketArgs,

        /// Volatility (σ)
        #[arg(long = "vol", default_value_t = 0.2)]
        volatility: f64,

        /// Smallest path count
        #[arg(long, default_value_t = 100)]
        min_paths: usize,

        /// Largest path count
        #[arg(long, default_value_t = 1_000_000)]
        max_paths: usize,

        /// Number of log-spaced path counts
        #[arg(long, default_value_t = 10)]
        points: usize,

        #[command(flatten)]
        mc: McArgs,
    },
}

impl Commands {
    fn overrides(&self, log_level: Option<String>) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level,
            ..Default::default()
        };

        match self {
            Commands::Price { .. } => {}
            Commands::Iv { tolerance, .. } => overrides.tolerance = *tolerance,
            Commands::Mc { paths, mc, .. } => {
                overrides.n_paths = *paths;
                overrides.seed = mc.seed;
                overrides.no_antithetic = mc.no_antithetic;
            }
            Commands::Convergence { mc, .. } => {
                overrides.seed = mc.seed;
                overrides.no_antithetic = mc.no_antithetic;
            }
        }

        overrides
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = cli.command.overrides(cli.log_level.clone());
    let config = build_config(&cli.config, &overrides)?;

    // Initialise tracing; RUST_LOG wins over configuration
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Price { market, volatility } => {
            commands::price::run(&market.market()?, market.option_type()?, volatility)
        }
        Commands::Iv { market, price, .. } => commands::implied_vol::run(
            price,
            &market.market()?,
            market.option_type()?,
            &config.solver,
        ),
        Commands::Mc {
            market, volatility, ..
        } => commands::mc::run(
            &market.market()?,
            market.option_type()?,
            volatility,
            &config.monte_carlo,
        ),
        Commands::Convergence {
            market,
            volatility,
            min_paths,
            max_paths,
            points,
            ..
        } => commands::convergence::run(
            &market.market()?,
            market.option_type()?,
            volatility,
            &commands::convergence::Sweep {
                min_paths,
                max_paths,
                points,
            },
            &config.monte_carlo,
        ),
    }
}
