//! Stochastic process parameters for Monte Carlo simulation.
//!
//! - [`GbmParams`]: drift, volatility and starting level of a GBM asset

pub mod gbm;

pub use gbm::GbmParams;
