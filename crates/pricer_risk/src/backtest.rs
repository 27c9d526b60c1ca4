//! Backtests over observed or simulated market data.
//!
//! - [`simulate_market_data`] turns a GBM path into a dated series
//! - [`run_backtest`] collects a strategy's daily and cumulative P&L
//! - [`hedging_performance`] repeats a backtest over many simulated paths
//!   in parallel and summarises the final P&L

use pricer_core::market_data::{MarketDataSeries, MarketSnapshot};
use pricer_core::types::{business_days_between, Date};
use pricer_models::models::GbmParams;
use pricer_pricing::mc::StochasticEngine;
use pricer_pricing::rng::UniformGenerator;
use rayon::prelude::*;
use tracing::debug;

use crate::hedging::{HedgedPortfolio, HedgingError, HedgingStrategy, PnlAttribution};

/// Dated series following a simulated GBM path.
///
/// The first entry holds `gbm.initial_value` on `start`, rolled back to
/// Friday when it falls on a weekend. The `length` simulated prices fall on
/// the business days after it, one step (1/250 year) apart. Every snapshot
/// carries the same `vol`, `rate` and `div_yield`.
///
/// # Errors
/// `HedgingError::MarketData` if the series cannot be built.
pub fn simulate_market_data<G: UniformGenerator>(
    engine: &mut StochasticEngine<G>,
    gbm: &GbmParams,
    start: Date,
    length: usize,
    vol: f64,
    rate: f64,
    div_yield: f64,
) -> Result<MarketDataSeries, HedgingError> {
    let start = start.prev_business_day();
    let snapshot = |spot| MarketSnapshot::new(spot, vol, rate, div_yield);

    let mut entries = Vec::with_capacity(length + 1);
    entries.push((start, snapshot(gbm.initial_value)));
    entries.extend(
        engine
            .dated_geometric_path(gbm, start, length)
            .into_iter()
            .map(|(date, spot)| (date, snapshot(spot))),
    );

    Ok(MarketDataSeries::new(entries)?)
}

/// Flat market used to generate synthetic backtest paths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticMarket {
    /// Dynamics of the underlying
    pub gbm: GbmParams,
    /// First date of every path; a weekend rolls back to Friday
    pub start: Date,
    /// Volatility quoted in every snapshot
    pub vol: f64,
    /// Interest rate quoted in every snapshot
    pub rate: f64,
    /// Dividend yield quoted in every snapshot
    pub div_yield: f64,
}

impl SyntheticMarket {
    /// Market whose paths drift at `rate - div_yield` with volatility `vol`.
    pub fn risk_neutral(spot: f64, vol: f64, rate: f64, div_yield: f64, start: Date) -> Self {
        Self {
            gbm: GbmParams::new(rate - div_yield, vol).with_initial_value(spot),
            start,
            vol,
            rate,
            div_yield,
        }
    }

    /// Business days a path needs to run from `start` to `expiry`.
    pub fn days_to_expiry(&self, expiry: Date) -> usize {
        business_days_between(self.start.prev_business_day(), expiry) as usize
    }

    /// One path of `length` business days.
    ///
    /// # Errors
    /// As [`simulate_market_data`].
    pub fn simulate<G: UniformGenerator>(
        &self,
        engine: &mut StochasticEngine<G>,
        length: usize,
    ) -> Result<MarketDataSeries, HedgingError> {
        simulate_market_data(engine, &self.gbm, self.start, length, self.vol, self.rate, self.div_yield)
    }
}

/// Daily and cumulative P&L of one backtest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktestReport {
    /// Strategy name
    pub strategy: String,
    /// P&L by leg per date
    pub daily: Vec<(Date, PnlAttribution)>,
    /// Running total per date
    pub cumulative: Vec<(Date, f64)>,
    /// Sum of the daily P&L by leg
    pub total: PnlAttribution,
}

impl BacktestReport {
    /// Final cumulative P&L.
    pub fn final_pnl(&self) -> f64 {
        self.total.total()
    }
}

/// Run `strategy` over `series`.
///
/// # Errors
/// As [`HedgingStrategy::daily_pnl`].
pub fn run_backtest<P: HedgedPortfolio>(
    strategy: &HedgingStrategy<P>,
    series: &MarketDataSeries,
) -> Result<BacktestReport, HedgingError> {
    let daily = strategy.daily_pnl(series)?;
    let cumulative = daily
        .iter()
        .scan(0.0, |running, (date, pnl)| {
            *running += pnl.total();
            Some((*date, *running))
        })
        .collect();
    let total = daily.iter().map(|(_, pnl)| *pnl).sum();

    Ok(BacktestReport {
        strategy: strategy.name().to_string(),
        daily,
        cumulative,
        total,
    })
}

/// Distribution of final hedging P&L across simulated paths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgingPerformance {
    /// Strategy name
    pub strategy: String,
    /// Number of simulated paths
    pub num_paths: usize,
    /// Mean final P&L
    pub mean: f64,
    /// Sample standard deviation of the final P&L
    pub std_dev: f64,
    /// Worst final P&L
    pub min: f64,
    /// Best final P&L
    pub max: f64,
}

/// Backtest `strategy` on `num_paths` simulated paths running from
/// `market.start` to expiry.
///
/// Path `i` is driven by a subtractive generator seeded `seed + i`, and
/// results are gathered in path order, so the summary is reproducible for a
/// given seed.
///
/// # Errors
/// - `HedgingError::InvalidSimulation` for zero paths or no business days
///   between `market.start` and expiry
/// - any backtest failure on a path
pub fn hedging_performance<P: HedgedPortfolio + Sync>(
    strategy: &HedgingStrategy<P>,
    market: &SyntheticMarket,
    num_paths: usize,
    seed: i32,
) -> Result<HedgingPerformance, HedgingError> {
    if num_paths == 0 {
        return Err(HedgingError::InvalidSimulation("at least one path is required".to_string()));
    }
    let length = market.days_to_expiry(strategy.expiry());
    if length == 0 {
        return Err(HedgingError::InvalidSimulation(format!(
            "no business days between {} and expiry {}",
            market.start,
            strategy.expiry()
        )));
    }

    debug!(strategy = strategy.name(), num_paths, length, seed, "simulating hedging performance");

    let finals = (0..num_paths)
        .into_par_iter()
        .map(|path| {
            let mut engine = StochasticEngine::seeded(Some(seed.wrapping_add(path as i32)));
            let series = market.simulate(&mut engine, length)?;
            Ok(run_backtest(strategy, &series)?.final_pnl())
        })
        .collect::<Result<Vec<f64>, HedgingError>>()?;

    let n = finals.len() as f64;
    let mean = finals.iter().sum::<f64>() / n;
    let std_dev = if finals.len() > 1 {
        (finals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };
    let min = finals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(HedgingPerformance {
        strategy: strategy.name().to_string(),
        num_paths,
        mean,
        std_dev,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hedging::StrategyKind;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{EquityOptionFactory, OptionType};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_simulated_series_layout() {
        let mut engine = StochasticEngine::seeded(Some(1234));
        let gbm = GbmParams::new(0.05, 0.2).with_initial_value(50.0);
        let start = date(2020, 5, 1);
        let series = simulate_market_data(&mut engine, &gbm, start, 7, 0.2, 0.05, 0.01).unwrap();

        assert_eq!(series.len(), 8);
        assert_eq!(series.first().unwrap(), &(start, MarketSnapshot::new(50.0, 0.2, 0.05, 0.01)));
        assert_eq!(series.last().unwrap().0, date(2020, 5, 12));
        assert!(series.dates().skip(1).all(|d| d.is_business_day()));
        assert!(series.iter().all(|(_, s)| s.vol == 0.2 && s.rate == 0.05 && s.div_yield == 0.01));
    }

    #[test]
    fn test_simulated_prices_follow_engine() {
        let gbm = GbmParams::new(0.05, 0.2).with_initial_value(50.0);
        let start = date(2020, 5, 1);

        let series = simulate_market_data(&mut StochasticEngine::seeded(Some(9)), &gbm, start, 5, 0.2, 0.05, 0.0)
            .unwrap();
        let path = StochasticEngine::seeded(Some(9)).geometric_brownian_path(&gbm, 1.0 / 250.0, 5);

        for ((_, snapshot), spot) in series.iter().skip(1).zip(path) {
            assert_eq!(snapshot.spot, spot);
        }
    }

    #[test]
    fn test_zero_length_series_holds_start_only() {
        let mut engine = StochasticEngine::seeded(Some(1));
        let series = simulate_market_data(&mut engine, &GbmParams::default(), date(2020, 5, 1), 0, 0.2, 0.05, 0.0)
            .unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_weekend_start_rolls_back_to_friday() {
        let gbm = GbmParams::new(0.05, 0.2).with_initial_value(50.0);
        let saturday = date(2020, 5, 2);

        let series = simulate_market_data(&mut StochasticEngine::seeded(Some(9)), &gbm, saturday, 5, 0.2, 0.05, 0.0)
            .unwrap();
        let friday = date(2020, 5, 1);
        let expected = simulate_market_data(&mut StochasticEngine::seeded(Some(9)), &gbm, friday, 5, 0.2, 0.05, 0.0)
            .unwrap();

        assert_eq!(series.first().unwrap().0, friday);
        assert!(series.dates().all(|d| d.is_business_day()));
        assert_eq!(series, expected);
    }

    #[test]
    fn test_weekend_start_paths_reach_expiry() {
        let expiry = date(2020, 6, 30);
        let saturday = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 5, 2));
        let friday = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 5, 1));

        assert_eq!(saturday.days_to_expiry(expiry), 42);
        assert_eq!(friday.days_to_expiry(expiry), 42);

        let series = saturday
            .simulate(&mut StochasticEngine::seeded(Some(3)), saturday.days_to_expiry(expiry))
            .unwrap();
        assert_eq!(series.last().unwrap().0, expiry);
    }

    #[test]
    fn test_run_backtest_report() {
        let option = EquityOptionFactory::create(OptionType::EuropeanCall, "IDX", date(2020, 6, 30), 100.0, "USD")
            .unwrap();
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, option, 10);
        let market = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 5, 1));
        let series = market.simulate(&mut StochasticEngine::seeded(Some(42)), 42).unwrap();

        let report = run_backtest(&strategy, &series).unwrap();
        assert_eq!(report.strategy, "Delta Hedge");
        assert_eq!(report.daily.len(), series.len());
        assert_eq!(report.cumulative.len(), series.len());
        assert_relative_eq!(report.final_pnl(), report.cumulative.last().unwrap().1, epsilon = 1e-9);
    }

    #[test]
    fn test_performance_is_reproducible() {
        let option = EquityOptionFactory::create(OptionType::EuropeanPut, "IDX", date(2020, 6, 30), 100.0, "USD")
            .unwrap();
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, option, 1);
        let market = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 5, 1));

        let a = hedging_performance(&strategy, &market, 16, 7).unwrap();
        let b = hedging_performance(&strategy, &market, 16, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.num_paths, 16);
        assert!(a.min <= a.mean && a.mean <= a.max);
    }

    #[test]
    fn test_performance_rejects_degenerate_requests() {
        let option = EquityOptionFactory::create(OptionType::EuropeanPut, "IDX", date(2020, 6, 30), 100.0, "USD")
            .unwrap();
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, option, 1);

        let market = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 5, 1));
        assert!(matches!(
            hedging_performance(&strategy, &market, 0, 1),
            Err(HedgingError::InvalidSimulation(_))
        ));

        let expired = SyntheticMarket::risk_neutral(100.0, 0.2, 0.03, 0.01, date(2020, 7, 1));
        assert!(matches!(
            hedging_performance(&strategy, &expired, 10, 1),
            Err(HedgingError::InvalidSimulation(_))
        ));
    }
}
