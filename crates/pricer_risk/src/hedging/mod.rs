//! Dynamic hedging of a single option position.
//!
//! # Architecture
//!
//! - [`HedgedPortfolio`] values the three legs (option, hedge, cash) on a
//!   re-hedge date and carries them one period forward
//! - [`DeltaHedgedPortfolio`] and [`StopLossPortfolio`] are the two hedging
//!   rules; [`AnyPortfolio`] selects between them at run time
//! - [`HedgingStrategy`] runs the day-by-day recurrence and reports P&L
//!   attributed to each leg
//!
//! The recurrence is strictly sequential: each day's position depends on
//! the previous day's hedge and cash.

mod delta;
mod error;
mod portfolio;
mod stop_loss;
mod strategy;

pub use delta::DeltaHedgedPortfolio;
pub use error::HedgingError;
pub use portfolio::{HedgedPortfolio, PnlAttribution, PortfolioValue};
pub use stop_loss::StopLossPortfolio;
pub use strategy::{AnyPortfolio, HedgingStrategy, StrategyKind};
