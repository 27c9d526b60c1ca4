//! Delta-hedged option position.

use pricer_core::market_data::MarketDataSeries;
use pricer_core::types::Date;
use pricer_models::instruments::EquityOption;

use super::error::HedgingError;
use super::portfolio::{HedgedPortfolio, PortfolioValue};

/// Option position hedged with `-Δ` shares per contract, financed in cash.
///
/// On every re-hedge date:
///
/// ```text
/// option = contracts × price
/// hedge  = -Δ × contracts × S
/// cash   = -(option + hedge)
/// ```
///
/// so the re-hedged position is worth exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaHedgedPortfolio {
    option: EquityOption,
    contracts: i32,
}

impl DeltaHedgedPortfolio {
    /// Hedge `contracts` units of `option`.
    pub fn new(option: EquityOption, contracts: i32) -> Self {
        Self { option, contracts }
    }
}

impl HedgedPortfolio for DeltaHedgedPortfolio {
    fn option(&self) -> &EquityOption {
        &self.option
    }

    fn contracts(&self) -> i32 {
        self.contracts
    }

    fn current_value(&self, date: Date, history: &MarketDataSeries) -> Result<PortfolioValue, HedgingError> {
        let contracts = f64::from(self.contracts);
        let spot = history.spot(date)?;

        let option = contracts * self.option.current_price(date, history)?;
        let hedge = -self.option.current_delta(date, history)? * contracts * spot;
        let cash = -(option + hedge);

        Ok(PortfolioValue::new(option, hedge, cash))
    }
}
