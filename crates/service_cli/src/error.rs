//! CLI error types

use pricer_core::market_data::MarketDataError;
use pricer_core::types::{DateError, PricingError};
use pricer_models::instruments::InstrumentError;
use pricer_pricing::mc::{ConfigError as MonteCarloConfigError, SimulationError};
use pricer_risk::hedging::HedgingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised while running a command
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A market data row could not be read
    #[error("Line {line}: {message}")]
    Load {
        /// One-based line number, header included
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Date parsing error
    #[error(transparent)]
    Date(#[from] DateError),

    /// Market data error
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Instrument construction error
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Pricing error
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Monte Carlo configuration error
    #[error("Monte Carlo configuration: {0}")]
    MonteCarloConfig(#[from] MonteCarloConfigError),

    /// Simulation error
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Hedging error
    #[error(transparent)]
    Hedging(#[from] HedgingError),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
