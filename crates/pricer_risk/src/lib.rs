//! # Pricer Risk (L4: Application)
//!
//! Dynamic hedging of single equity option positions.
//!
//! This crate provides:
//! - Hedged portfolios: delta hedging and stop-loss hedging
//! - Daily and cumulative P&L attribution by leg (option, hedge, cash)
//! - Backtests over observed series or simulated GBM paths
//! - Rayon-parallel hedging-error distributions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  hedging/   - HedgedPortfolio, Delta,   │
//! │               StopLoss, Strategy        │
//! │  backtest   - simulated market data,    │
//! │               reports, performance      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Samplers, GBM paths, Monte Carlo       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketDataSeries;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{EquityOptionFactory, OptionType};
//! use pricer_risk::hedging::{HedgingStrategy, StrategyKind};
//!
//! let d = |day| Date::from_ymd(2020, 5, day).unwrap();
//! let series = MarketDataSeries::from_prices(
//!     &[d(1), d(4), d(5)],
//!     &[100.0, 101.0, 99.5],
//!     0.2,
//!     0.05,
//!     0.0,
//! )
//! .unwrap();
//!
//! let call = EquityOptionFactory::create(OptionType::EuropeanCall, "IDX", d(29), 100.0, "USD").unwrap();
//! let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, call, 10);
//!
//! let cumulative = strategy.cumulative_pnl(&series).unwrap();
//! assert_eq!(cumulative.len(), 3);
//! assert_eq!(cumulative[0].1, 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod backtest;
pub mod hedging;

pub use backtest::{
    hedging_performance, run_backtest, simulate_market_data, BacktestReport, HedgingPerformance, SyntheticMarket,
};
pub use hedging::{HedgedPortfolio, HedgingError, HedgingStrategy, PnlAttribution, StrategyKind};
