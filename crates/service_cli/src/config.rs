//! CLI configuration management
//!
//! Settings come from a TOML file, then `HEDGESIM_*` environment variables,
//! then command-line flags, each overriding the one before.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pricer_pricing::mc::config::{DEFAULT_CHUNK_SIZE, MAX_PATHS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "hedgesim.toml";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidOutputFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {var}={value} is not valid")]
    EnvError { var: String, value: String },

    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Seed for simulated paths and Monte Carlo; drawn at random when unset
    pub seed: Option<i32>,
    /// Monte Carlo paths
    pub num_paths: usize,
    /// Monte Carlo paths per parallel chunk
    pub chunk_size: usize,
    /// Option contracts held by hedging backtests
    pub contracts: i32,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Output format
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_paths: 10_000,
            chunk_size: DEFAULT_CHUNK_SIZE,
            contracts: 1,
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, then
    /// apply environment overrides.
    ///
    /// The result is not validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `HEDGESIM_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("HEDGESIM_SEED") {
            self.seed = Some(parse_env("HEDGESIM_SEED", &value)?);
        }
        if let Some(value) = lookup("HEDGESIM_NUM_PATHS") {
            self.num_paths = parse_env("HEDGESIM_NUM_PATHS", &value)?;
        }
        if let Some(value) = lookup("HEDGESIM_CHUNK_SIZE") {
            self.chunk_size = parse_env("HEDGESIM_CHUNK_SIZE", &value)?;
        }
        if let Some(value) = lookup("HEDGESIM_CONTRACTS") {
            self.contracts = parse_env("HEDGESIM_CONTRACTS", &value)?;
        }
        if let Some(value) = lookup("HEDGESIM_LOG_LEVEL") {
            self.log_level = value.parse()?;
        }
        if let Some(value) = lookup("HEDGESIM_OUTPUT_FORMAT") {
            self.output_format = value.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.seed.is_some_and(|seed| seed < 0) {
            problems.push(format!("seed must be non-negative, got {}", self.seed.unwrap_or_default()));
        }
        if self.num_paths == 0 || self.num_paths > MAX_PATHS {
            problems.push(format!("num_paths must be between 1 and {}, got {}", MAX_PATHS, self.num_paths));
        }
        if self.chunk_size == 0 {
            problems.push("chunk_size must be positive".to_string());
        }
        if self.contracts == 0 {
            problems.push("contracts must be non-zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems))
        }
    }

    /// Seed for the Monte Carlo pricer.
    pub fn monte_carlo_seed(&self) -> Option<u64> {
        self.seed.map(|seed| u64::from(seed.unsigned_abs()))
    }
}

fn parse_env<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        var: var.to_string(),
        value: value.to_string(),
    })
}
