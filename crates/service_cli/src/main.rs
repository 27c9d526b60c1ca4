//! hedgesim - Command Line Pricing, Simulation and Hedging Backtests
//!
//! This is the operational entry point for the hedgesim pricing library.
//!
//! # Commands
//!
//! - `hedgesim price` - Closed-form value and Greeks of one option
//! - `hedgesim simulate` - One seeded Brownian path
//! - `hedgesim mc` - Monte Carlo value against the closed form
//! - `hedgesim hedge` - Delta or stop-loss hedging backtest
//! - `hedgesim check` - Show and validate the configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires the pricer layers to a
//! command line. Logs go to stderr; results go to stdout as a table, CSV
//! or JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod loader;
mod output;

pub use error::{CliError, Result};

use commands::hedge::HedgeArgs;
use commands::simulate::SimulateArgs;
use commands::{MarketArgs, OptionArgs};
use config::{CliConfig, OutputFormat};

/// hedgesim option pricing and hedging CLI
#[derive(Parser)]
#[command(name = "hedgesim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./hedgesim.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Random seed; overrides the config
    #[arg(long, global = true)]
    seed: Option<i32>,

    /// Output format (table, csv, json); overrides the config
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form price and Greeks
    Price {
        #[command(flatten)]
        option: OptionArgs,

        #[command(flatten)]
        market: MarketArgs,
    },

    /// Simulate a Brownian path
    Simulate(SimulateArgs),

    /// Monte Carlo price against the closed form
    Mc {
        #[command(flatten)]
        option: OptionArgs,

        #[command(flatten)]
        market: MarketArgs,

        /// Number of Monte Carlo paths; overrides the config
        #[arg(long)]
        num_paths: Option<usize>,
    },

    /// Backtest a hedging strategy
    Hedge(HedgeArgs),

    /// Show and validate the configuration
    Check,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    init_tracing(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    });
    debug!(?config, "effective configuration");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // `check` reports validation problems itself
    if !matches!(cli.command, Commands::Check) {
        config.validate()?;
    }

    let format = config.output_format;

    match cli.command {
        Commands::Price { option, market } => commands::price::run(&option, &market, format),
        Commands::Simulate(args) => commands::simulate::run(&args, config.seed, format),
        Commands::Mc {
            option,
            market,
            num_paths,
        } => commands::mc::run(&option, &market, num_paths, &config, format),
        Commands::Hedge(args) => commands::hedge::run(&args, &config, format),
        Commands::Check => commands::check::run(&config, format),
    }?;

    Ok(())
}
