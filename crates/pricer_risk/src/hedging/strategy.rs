//! Hedging strategies and the daily P&L recurrence.

use std::fmt;
use std::str::FromStr;

use pricer_core::market_data::MarketDataSeries;
use pricer_core::types::Date;
use pricer_models::instruments::EquityOption;
use tracing::debug;

use super::delta::DeltaHedgedPortfolio;
use super::error::HedgingError;
use super::portfolio::{HedgedPortfolio, PnlAttribution, PortfolioValue};
use super::stop_loss::StopLossPortfolio;

/// Hedging rules available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    /// Re-hedge to delta every day
    DeltaHedge,
    /// Hold one share per contract while in the money
    StopLoss,
}

impl StrategyKind {
    /// Every strategy, in declaration order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::DeltaHedge, StrategyKind::StopLoss];

    /// Display name.
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::DeltaHedge => "Delta Hedge",
            StrategyKind::StopLoss => "Stop Loss",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for StrategyKind {
    type Err = HedgingError;

    /// Parse a strategy name, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "deltahedge" | "deltahedging" | "delta" => Ok(StrategyKind::DeltaHedge),
            "stoploss" => Ok(StrategyKind::StopLoss),
            _ => Err(HedgingError::UnknownStrategy(s.to_string())),
        }
    }
}

/// A portfolio of either built-in kind.
///
/// Enum dispatch over the concrete portfolios, for strategies chosen at run
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyPortfolio {
    /// Delta-hedged position
    Delta(DeltaHedgedPortfolio),
    /// Stop-loss position
    StopLoss(StopLossPortfolio),
}

impl HedgedPortfolio for AnyPortfolio {
    fn option(&self) -> &EquityOption {
        match self {
            AnyPortfolio::Delta(p) => p.option(),
            AnyPortfolio::StopLoss(p) => p.option(),
        }
    }

    fn contracts(&self) -> i32 {
        match self {
            AnyPortfolio::Delta(p) => p.contracts(),
            AnyPortfolio::StopLoss(p) => p.contracts(),
        }
    }

    fn current_value(&self, date: Date, history: &MarketDataSeries) -> Result<PortfolioValue, HedgingError> {
        match self {
            AnyPortfolio::Delta(p) => p.current_value(date, history),
            AnyPortfolio::StopLoss(p) => p.current_value(date, history),
        }
    }
}

/// A named hedged portfolio run over a market data series.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{MarketDataSeries, MarketSnapshot};
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{EquityOptionFactory, OptionType};
/// use pricer_risk::hedging::{HedgingStrategy, StrategyKind};
///
/// let expiry = Date::from_ymd(2020, 6, 30).unwrap();
/// let put = EquityOptionFactory::create(OptionType::EuropeanPut, "SPX", expiry, 1000.0, "USD").unwrap();
/// let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put, 3);
///
/// let series = MarketDataSeries::new(vec![
///     (Date::from_ymd(2020, 5, 1).unwrap(), MarketSnapshot::new(1020.0, 0.28, 0.05, 0.02)),
///     (Date::from_ymd(2020, 5, 4).unwrap(), MarketSnapshot::new(1100.0, 0.28, 0.05, 0.02)),
/// ]).unwrap();
///
/// let pnl = strategy.daily_pnl(&series).unwrap();
/// assert_eq!(pnl.len(), 2);
/// assert_eq!(pnl[0].1.total(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HedgingStrategy<P = AnyPortfolio> {
    name: String,
    portfolio: P,
}

impl HedgingStrategy<AnyPortfolio> {
    /// Strategy of the given kind, named after it.
    pub fn from_kind(kind: StrategyKind, option: EquityOption, contracts: i32) -> Self {
        let portfolio = match kind {
            StrategyKind::DeltaHedge => AnyPortfolio::Delta(DeltaHedgedPortfolio::new(option, contracts)),
            StrategyKind::StopLoss => AnyPortfolio::StopLoss(StopLossPortfolio::new(option, contracts)),
        };
        Self::new(portfolio, kind.description())
    }
}

impl<P: HedgedPortfolio> HedgingStrategy<P> {
    /// Wrap a portfolio under a display name.
    pub fn new(portfolio: P, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            portfolio,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hedged portfolio.
    pub fn portfolio(&self) -> &P {
        &self.portfolio
    }

    /// Expiry of the hedged option.
    pub fn expiry(&self) -> Date {
        self.portfolio.expiry()
    }

    /// Daily P&L by leg.
    ///
    /// The series is first cut at expiry. The first date carries a zero
    /// entry. For each later date the position is re-hedged on the previous
    /// date, carried forward with [`HedgedPortfolio::next_value`], and the
    /// change in each leg is recorded against the later date.
    ///
    /// # Errors
    /// - `HedgingError::EmptyMarketData` if nothing is dated on or before expiry
    /// - pricing or lookup failures on any date
    pub fn daily_pnl(&self, series: &MarketDataSeries) -> Result<Vec<(Date, PnlAttribution)>, HedgingError> {
        let history = series.truncate_after(self.expiry());
        let entries = history.as_slice();
        let (first_date, _) = entries.first().ok_or(HedgingError::EmptyMarketData)?;

        debug!(
            strategy = %self.name,
            option = %self.portfolio.option(),
            contracts = self.portfolio.contracts(),
            dates = entries.len(),
            "running daily P&L"
        );

        let mut pnl = Vec::with_capacity(entries.len());
        pnl.push((*first_date, PnlAttribution::default()));

        for pair in entries.windows(2) {
            let (current, next) = (pair[0].0, pair[1].0);
            let now = self.portfolio.current_value(current, &history)?;
            let later = self
                .portfolio
                .next_value(current, next, &history, now.hedge, now.cash)?;
            pnl.push((next, now.change_to(&later)));
        }

        Ok(pnl)
    }

    /// Running total of the daily P&L.
    ///
    /// # Errors
    /// As [`daily_pnl`](Self::daily_pnl).
    pub fn cumulative_pnl(&self, series: &MarketDataSeries) -> Result<Vec<(Date, f64)>, HedgingError> {
        let daily = self.daily_pnl(series)?;
        Ok(daily
            .into_iter()
            .scan(0.0, |running, (date, pnl)| {
                *running += pnl.total();
                Some((date, *running))
            })
            .collect())
    }

    /// Position held on each date.
    ///
    /// Every date but the last shows the re-hedged position. The last date
    /// shows the position carried into it, since no re-hedge happens there.
    ///
    /// # Errors
    /// As [`daily_pnl`](Self::daily_pnl).
    pub fn portfolio_values(&self, series: &MarketDataSeries) -> Result<Vec<(Date, PortfolioValue)>, HedgingError> {
        let history = series.truncate_after(self.expiry());
        let entries = history.as_slice();
        let (first_date, _) = entries.first().ok_or(HedgingError::EmptyMarketData)?;

        if entries.len() == 1 {
            let value = self.portfolio.current_value(*first_date, &history)?;
            return Ok(vec![(*first_date, value)]);
        }

        let mut values = Vec::with_capacity(entries.len());
        for pair in entries.windows(2) {
            let (current, next) = (pair[0].0, pair[1].0);
            let now = self.portfolio.current_value(current, &history)?;
            values.push((current, now));

            if values.len() == entries.len() - 1 {
                let carried = self
                    .portfolio
                    .next_value(current, next, &history, now.hedge, now.cash)?;
                values.push((next, carried));
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::market_data::MarketSnapshot;
    use pricer_models::instruments::{EquityOptionFactory, OptionType};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn put() -> EquityOption {
        EquityOptionFactory::create(OptionType::EuropeanPut, "Test asset", date(2020, 6, 30), 1000.0, "Test curve")
            .unwrap()
    }

    fn series(points: &[(Date, f64)]) -> MarketDataSeries {
        MarketDataSeries::new(
            points
                .iter()
                .map(|(d, s)| (*d, MarketSnapshot::new(*s, 0.28, 0.05, 0.02)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_strategy_kind() {
        assert_eq!("delta".parse::<StrategyKind>().unwrap(), StrategyKind::DeltaHedge);
        assert_eq!("Delta Hedge".parse::<StrategyKind>().unwrap(), StrategyKind::DeltaHedge);
        assert_eq!("stop_loss".parse::<StrategyKind>().unwrap(), StrategyKind::StopLoss);
        assert_eq!(
            "straddle".parse::<StrategyKind>(),
            Err(HedgingError::UnknownStrategy("straddle".to_string()))
        );
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_kind_names_strategy() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::StopLoss, put(), 2);
        assert_eq!(strategy.name(), "Stop Loss");
        assert!(matches!(strategy.portfolio(), AnyPortfolio::StopLoss(_)));
        assert_eq!(strategy.portfolio().contracts(), 2);
        assert_eq!(strategy.expiry(), date(2020, 6, 30));
    }

    #[test]
    fn test_daily_pnl_fixture_step() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let data = series(&[(date(2020, 5, 1), 1020.0), (date(2020, 5, 4), 1100.0)]);
        let pnl = strategy.daily_pnl(&data).unwrap();

        assert_eq!(pnl[0], (date(2020, 5, 1), PnlAttribution::default()));
        let (d, step) = pnl[1];
        assert_eq!(d, date(2020, 5, 4));
        assert_abs_diff_eq!(step.option, 36.651980 - 103.641378, epsilon = 1e-6);
        assert_abs_diff_eq!(step.hedge, 1289.697102 - 1195.805281, epsilon = 1e-6);
        assert_abs_diff_eq!(step.cash, -1299.706574 + 1299.446659, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_series_is_error() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        assert_eq!(
            strategy.daily_pnl(&MarketDataSeries::default()),
            Err(HedgingError::EmptyMarketData)
        );

        // Everything after expiry is dropped
        let late = series(&[(date(2020, 7, 1), 1000.0)]);
        assert_eq!(strategy.daily_pnl(&late), Err(HedgingError::EmptyMarketData));
    }

    #[test]
    fn test_single_date_gives_single_zero_entry() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let pnl = strategy.daily_pnl(&series(&[(date(2020, 5, 1), 1000.0)])).unwrap();
        assert_eq!(pnl, vec![(date(2020, 5, 1), PnlAttribution::default())]);
    }

    #[test]
    fn test_dates_after_expiry_ignored() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let data = series(&[
            (date(2020, 6, 26), 990.0),
            (date(2020, 6, 29), 995.0),
            (date(2020, 6, 30), 1010.0),
            (date(2020, 7, 1), 1020.0),
        ]);
        let pnl = strategy.daily_pnl(&data).unwrap();
        assert_eq!(pnl.len(), 3);
        assert_eq!(pnl.last().unwrap().0, date(2020, 6, 30));
    }

    #[test]
    fn test_expiry_step_uses_payoff() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let data = series(&[(date(2020, 6, 29), 995.0), (date(2020, 6, 30), 980.0)]);
        let values = strategy.portfolio_values(&data).unwrap();

        // 3 contracts × max(1000 - 980, 0)
        assert_relative_eq!(values[1].1.option, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cumulative_is_running_sum() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let data = series(&[
            (date(2020, 5, 1), 1020.0),
            (date(2020, 5, 4), 1100.0),
            (date(2020, 5, 5), 1050.0),
            (date(2020, 5, 6), 980.0),
        ]);
        let daily = strategy.daily_pnl(&data).unwrap();
        let cumulative = strategy.cumulative_pnl(&data).unwrap();

        assert_eq!(daily.len(), cumulative.len());
        let mut running = 0.0;
        for ((d1, step), (d2, total)) in daily.iter().zip(&cumulative) {
            running += step.total();
            assert_eq!(d1, d2);
            assert_relative_eq!(*total, running, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_portfolio_values_rehedged_positions_are_flat() {
        let strategy = HedgingStrategy::from_kind(StrategyKind::DeltaHedge, put(), 3);
        let data = series(&[
            (date(2020, 5, 1), 1020.0),
            (date(2020, 5, 4), 1100.0),
            (date(2020, 5, 5), 1050.0),
        ]);
        let values = strategy.portfolio_values(&data).unwrap();
        assert_eq!(values.len(), 3);

        for (_, value) in &values[..2] {
            assert_abs_diff_eq!(value.total(), 0.0, epsilon = 1e-9);
        }

        // The carried position's value is the last day's P&L
        let daily = strategy.daily_pnl(&data).unwrap();
        assert_relative_eq!(values[2].1.total(), daily[2].1.total(), epsilon = 1e-9);
    }
}
