//! Hedge command implementation
//!
//! Backtests a hedging strategy over market data read from CSV or simulated
//! from a GBM path, or summarises its hedging error over many simulated
//! paths.

use std::path::PathBuf;

use clap::Args;
use pricer_core::market_data::MarketDataSeries;
use pricer_core::types::Date;
use pricer_pricing::mc::StochasticEngine;
use pricer_risk::backtest::{hedging_performance, run_backtest, BacktestReport, HedgingPerformance, SyntheticMarket};
use pricer_risk::hedging::{HedgingStrategy, StrategyKind};
use serde::Serialize;
use tracing::info;

use super::OptionArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::loader::load_market_data;
use crate::output::{fixed, print_rows, Tabular};
use crate::{CliError, Result};

/// Backtest arguments
#[derive(Debug, Clone, Args)]
pub struct HedgeArgs {
    /// Hedging strategy (delta, stop-loss)
    #[arg(long, default_value = "delta")]
    pub strategy: StrategyKind,

    #[command(flatten)]
    pub option: OptionArgs,

    /// Contracts held; overrides the config
    #[arg(long, allow_hyphen_values = true)]
    pub contracts: Option<i32>,

    /// Market data CSV (date,currentPrice,vol,interestRate,divYield)
    #[arg(long, conflicts_with = "paths")]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    pub market: SyntheticArgs,

    /// Summarise the final P&L over this many simulated paths
    #[arg(long)]
    pub paths: Option<usize>,
}

/// Flat market for simulated backtests
#[derive(Debug, Clone, Args)]
pub struct SyntheticArgs {
    /// First date of the simulated path (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<Date>,

    /// Spot on the start date
    #[arg(long)]
    pub spot: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub vol: Option<f64>,

    /// Continuously compounded interest rate
    #[arg(long, default_value_t = 0.0)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0)]
    pub div_yield: f64,
}

impl SyntheticArgs {
    /// Risk-neutral market, if start, spot and vol were all given.
    pub fn market(&self) -> Result<SyntheticMarket> {
        match (self.start, self.spot, self.vol) {
            (Some(start), Some(spot), Some(vol)) => {
                Ok(SyntheticMarket::risk_neutral(spot, vol, self.rate, self.div_yield, start))
            }
            _ => Err(CliError::InvalidArgument(
                "simulated backtests need --start, --spot and --vol (or pass --data)".to_string(),
            )),
        }
    }
}

/// One day of a backtest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HedgeRow {
    pub date: Date,
    pub option_pnl: f64,
    pub hedge_pnl: f64,
    pub cash_pnl: f64,
    pub daily_pnl: f64,
    pub cumulative_pnl: f64,
}

impl Tabular for HedgeRow {
    fn headers() -> &'static [&'static str] {
        &["Date", "Option", "Hedge", "Cash", "Daily", "Cumulative"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            fixed(Some(self.option_pnl)),
            fixed(Some(self.hedge_pnl)),
            fixed(Some(self.cash_pnl)),
            fixed(Some(self.daily_pnl)),
            fixed(Some(self.cumulative_pnl)),
        ]
    }
}

/// Hedging error across simulated paths
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub strategy: String,
    pub num_paths: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<HedgingPerformance> for PerformanceRow {
    fn from(p: HedgingPerformance) -> Self {
        Self {
            strategy: p.strategy,
            num_paths: p.num_paths,
            mean: p.mean,
            std_dev: p.std_dev,
            min: p.min,
            max: p.max,
        }
    }
}

impl Tabular for PerformanceRow {
    fn headers() -> &'static [&'static str] {
        &["Strategy", "Paths", "Mean", "Std dev", "Min", "Max"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.strategy.clone(),
            self.num_paths.to_string(),
            fixed(Some(self.mean)),
            fixed(Some(self.std_dev)),
            fixed(Some(self.min)),
            fixed(Some(self.max)),
        ]
    }
}

/// Flatten a report into printable rows.
pub fn hedge_rows(report: &BacktestReport) -> Vec<HedgeRow> {
    report
        .daily
        .iter()
        .zip(&report.cumulative)
        .map(|((date, pnl), (_, cumulative))| HedgeRow {
            date: *date,
            option_pnl: pnl.option,
            hedge_pnl: pnl.hedge,
            cash_pnl: pnl.cash,
            daily_pnl: pnl.total(),
            cumulative_pnl: *cumulative,
        })
        .collect()
}

/// Simulated series from `market.start` to `expiry`.
pub fn simulated_series(market: &SyntheticMarket, expiry: Date, seed: Option<i32>) -> Result<MarketDataSeries> {
    let length = market.days_to_expiry(expiry);
    let mut engine = StochasticEngine::seeded(seed);
    info!(
        seed = engine.sampler_mut().generator_mut().seed(),
        length,
        "simulating market data"
    );
    Ok(market.simulate(&mut engine, length)?)
}

/// Run the hedge command
pub fn run(args: &HedgeArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let contracts = args.contracts.unwrap_or(config.contracts);
    if contracts == 0 {
        return Err(CliError::InvalidArgument("contracts must be non-zero".to_string()));
    }
    let option = args.option.build()?;
    let expiry = option.expiry();
    let strategy = HedgingStrategy::from_kind(args.strategy, option, contracts);

    if let Some(num_paths) = args.paths {
        let market = args.market.market()?;
        let seed = config.seed.unwrap_or_default();
        info!(strategy = strategy.name(), num_paths, seed, "measuring hedging performance");

        let performance = hedging_performance(&strategy, &market, num_paths, seed)?;
        return print_rows(format, &[PerformanceRow::from(performance)]);
    }

    let series = match &args.data {
        Some(path) => load_market_data(path)?,
        None => simulated_series(&args.market.market()?, expiry, config.seed)?,
    };
    info!(strategy = strategy.name(), contracts, dates = series.len(), "running backtest");

    let report = run_backtest(&strategy, &series)?;
    print_rows(format, &hedge_rows(&report))?;
    info!(final_pnl = report.final_pnl(), "backtest complete");
    Ok(())
}
