//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `DateError`: Errors from date construction and parsing
//! - `InterpolationError`: Errors from interpolation operations

use std::fmt;
use thiserror::Error;

use crate::market_data::MarketDataError;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `DegenerateTime`: Closed form evaluated at or past expiry
/// - `UnsupportedGreek`: Sensitivity not available for the option variant
/// - `MarketData`: Market data lookup failed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Time to expiry is zero or negative; the payoff applies instead.
    DegenerateTime {
        /// Offending time to expiry in years
        t: f64,
    },

    /// Requested sensitivity is not implemented for the option variant.
    UnsupportedGreek {
        /// Greek name, e.g. "gamma"
        greek: String,
        /// Option variant, e.g. "digital"
        variant: String,
    },

    /// Market data error
    MarketData(MarketDataError),
}

impl PricingError {
    /// Create an `UnsupportedGreek` error.
    pub fn unsupported_greek(greek: impl Into<String>, variant: impl Into<String>) -> Self {
        PricingError::UnsupportedGreek {
            greek: greek.into(),
            variant: variant.into(),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DegenerateTime { t } => write!(
                f,
                "Degenerate time to expiry: T = {} (use the payoff at expiry)",
                t
            ),
            PricingError::UnsupportedGreek { greek, variant } => {
                write!(f, "Greek '{}' is not supported for {} options", greek, variant)
            }
            PricingError::MarketData(err) => write!(f, "Market data error: {}", err),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::MarketData(err) => Some(err),
            _ => None,
        }
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Interpolation-related errors.
///
/// # Variants
/// - `InvalidArgumentCount`: Wrong number of coordinate points for the scheme
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Data violates monotonicity requirement
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::InvalidArgumentCount { expected: 2, got: 3 };
/// assert!(format!("{}", err).contains("expected 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Coordinate lists do not hold the number of points the scheme needs.
    #[error("Invalid argument count: expected {expected} points, got {got}")]
    InvalidArgumentCount {
        /// Required number of points
        expected: usize,
        /// Number of points provided
        got: usize,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not strictly increasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Date;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::DegenerateTime { t: 0.0 };
        assert!(format!("{}", err).contains("T = 0"));

        let err = PricingError::unsupported_greek("gamma", "digital");
        assert_eq!(
            format!("{}", err),
            "Greek 'gamma' is not supported for digital options"
        );
    }

    #[test]
    fn test_pricing_error_source() {
        use std::error::Error;

        let date = Date::from_ymd(2020, 5, 1).unwrap();
        let err: PricingError = MarketDataError::DateNotFound { date }.into();
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("2020-05-01"));
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(format!("{}", err), "Date parse error: bad");
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::InsufficientData { got: 0, need: 1 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 0, need at least 1"
        );
    }
}
