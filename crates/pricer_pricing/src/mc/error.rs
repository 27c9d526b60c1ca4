//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the simulation engine.

use std::fmt;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Chunk size of zero.
    InvalidChunkSize(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk size {}: must be positive", size)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime simulation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Rejected configuration.
    #[error("Monte Carlo configuration error: {0}")]
    Config(#[from] ConfigError),

    /// GBM parameters that cannot drive a price path.
    #[error("Invalid GBM parameters: {reason}")]
    InvalidModel {
        /// What is wrong with the parameters
        reason: String,
    },

    /// Discount factor that is not a finite positive number.
    #[error("Invalid discount factor: {0}")]
    InvalidDiscountFactor(f64),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
