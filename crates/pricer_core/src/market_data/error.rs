//! Market data error types.
//!
//! Errors raised by the dated market-data series, yield curves and the
//! volatility surface.

use crate::types::{Date, InterpolationError, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `DateNotFound`: Exact-date lookup on a series failed
/// - `UnsortedDates`: Series dates are not strictly increasing
/// - `Empty`: Series or grid holds no data
/// - `InvalidPeriod`: Forward period of non-positive length
/// - `InvalidGrid`: Curve or surface grid is malformed
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
/// use pricer_core::types::Date;
///
/// let date = Date::from_ymd(2020, 5, 1).unwrap();
/// let err = MarketDataError::DateNotFound { date };
/// assert_eq!(format!("{}", err), "No market data for 2020-05-01");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// No snapshot exists for the requested date.
    #[error("No market data for {date}")]
    DateNotFound {
        /// The requested date
        date: Date,
    },

    /// Dates are duplicated or out of order.
    #[error("Dates must be strictly increasing: {next} follows {previous}")]
    UnsortedDates {
        /// Earlier entry
        previous: Date,
        /// Entry that breaks the ordering
        next: Date,
    },

    /// No data supplied.
    #[error("Empty market data: {0}")]
    Empty(String),

    /// Forward period with a non-positive length.
    #[error("Invalid period: end tenor {end} must exceed start tenor {start}")]
    InvalidPeriod {
        /// Start tenor in years
        start: f64,
        /// End tenor in years
        end: f64,
    },

    /// Malformed curve or surface grid.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::MarketData(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_dates_display() {
        let previous = Date::from_ymd(2020, 5, 4).unwrap();
        let next = Date::from_ymd(2020, 5, 1).unwrap();
        let err = MarketDataError::UnsortedDates { previous, next };
        assert_eq!(
            format!("{}", err),
            "Dates must be strictly increasing: 2020-05-01 follows 2020-05-04"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let interp_err = InterpolationError::InvalidArgumentCount {
            expected: 4,
            got: 3,
        };
        let mkt_err: MarketDataError = interp_err.into();
        assert!(matches!(mkt_err, MarketDataError::Interpolation(_)));
    }

    #[test]
    fn test_into_pricing_error() {
        let mkt_err = MarketDataError::Empty("series".to_string());
        let pricing_err: PricingError = mkt_err.clone().into();
        assert_eq!(pricing_err, PricingError::MarketData(mkt_err));
    }
}
