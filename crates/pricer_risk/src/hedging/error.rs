//! Hedging error types.
//!
//! This module provides structured error types for hedged-portfolio
//! valuation and backtests using `thiserror` for derivation.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur while running a hedging strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HedgingError {
    /// No market data on or before expiry.
    #[error("No market data to hedge over")]
    EmptyMarketData,

    /// Option valuation failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Market data lookup or construction failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Unrecognised strategy name.
    #[error("Unknown hedging strategy: {0}")]
    UnknownStrategy(String),

    /// Simulation request that cannot be run.
    #[error("Invalid simulation: {0}")]
    InvalidSimulation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::Date;

    #[test]
    fn test_error_display_empty() {
        assert_eq!(HedgingError::EmptyMarketData.to_string(), "No market data to hedge over");
    }

    #[test]
    fn test_error_display_unknown_strategy() {
        let err = HedgingError::UnknownStrategy("gamma-scalp".to_string());
        assert_eq!(format!("{}", err), "Unknown hedging strategy: gamma-scalp");
    }

    #[test]
    fn test_from_market_data_error() {
        let date = Date::from_ymd(2020, 5, 1).unwrap();
        let err: HedgingError = MarketDataError::DateNotFound { date }.into();
        assert_eq!(err.to_string(), "Market data error: No market data for 2020-05-01");
    }

    #[test]
    fn test_from_pricing_error() {
        let err: HedgingError = PricingError::DegenerateTime { t: 0.0 }.into();
        assert!(matches!(err, HedgingError::Pricing(PricingError::DegenerateTime { .. })));
    }
}
