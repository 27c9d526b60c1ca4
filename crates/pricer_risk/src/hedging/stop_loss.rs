//! Stop-loss hedged option position.

use pricer_core::market_data::MarketDataSeries;
use pricer_core::types::Date;
use pricer_models::instruments::EquityOption;

use super::error::HedgingError;
use super::portfolio::{HedgedPortfolio, PortfolioValue};

/// Option position covered with one share per contract while in the money.
///
/// On every re-hedge date:
///
/// ```text
/// option = contracts × price
/// hedge  = -S × contracts (ITM call), +S × contracts (ITM put), 0 otherwise
/// cash   = -(option + option)
/// ```
///
/// The cash leg ignores the hedge, so unlike [`DeltaHedgedPortfolio`] the
/// re-hedged position is not self-financing.
///
/// [`DeltaHedgedPortfolio`]: super::DeltaHedgedPortfolio
#[derive(Debug, Clone, PartialEq)]
pub struct StopLossPortfolio {
    option: EquityOption,
    contracts: i32,
}

impl StopLossPortfolio {
    /// Cover `contracts` units of `option`.
    pub fn new(option: EquityOption, contracts: i32) -> Self {
        Self { option, contracts }
    }
}

impl HedgedPortfolio for StopLossPortfolio {
    fn option(&self) -> &EquityOption {
        &self.option
    }

    fn contracts(&self) -> i32 {
        self.contracts
    }

    fn current_value(&self, date: Date, history: &MarketDataSeries) -> Result<PortfolioValue, HedgingError> {
        let contracts = f64::from(self.contracts);
        let option = contracts * self.option.current_price(date, history)?;

        let hedge = if self.option.is_in_the_money(date, history)? {
            let spot = history.spot(date)?;
            let covered = if self.option.is_call() { -spot } else { spot };
            covered * contracts
        } else {
            0.0
        };
        let cash = -(option + option);

        Ok(PortfolioValue::new(option, hedge, cash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::MarketSnapshot;
    use pricer_models::instruments::{EquityOptionFactory, OptionType};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn series(spot: f64) -> MarketDataSeries {
        MarketDataSeries::new(vec![(date(2020, 5, 1), MarketSnapshot::new(spot, 0.28, 0.05, 0.02))]).unwrap()
    }

    fn portfolio(option_type: OptionType) -> StopLossPortfolio {
        let option = EquityOptionFactory::create(option_type, "IDX", date(2020, 6, 30), 1000.0, "USD").unwrap();
        StopLossPortfolio::new(option, 3)
    }

    #[test]
    fn test_itm_call_is_short_shares() {
        let value = portfolio(OptionType::EuropeanCall)
            .current_value(date(2020, 5, 1), &series(1050.0))
            .unwrap();
        assert_eq!(value.hedge, -3150.0);
    }

    #[test]
    fn test_itm_put_is_long_shares() {
        let value = portfolio(OptionType::EuropeanPut)
            .current_value(date(2020, 5, 1), &series(950.0))
            .unwrap();
        assert_eq!(value.hedge, 2850.0);
    }

    #[test]
    fn test_otm_is_unhedged() {
        let call = portfolio(OptionType::EuropeanCall)
            .current_value(date(2020, 5, 1), &series(950.0))
            .unwrap();
        let put = portfolio(OptionType::EuropeanPut)
            .current_value(date(2020, 5, 1), &series(1050.0))
            .unwrap();
        assert_eq!(call.hedge, 0.0);
        assert_eq!(put.hedge, 0.0);
    }

    #[test]
    fn test_at_the_money_is_unhedged() {
        let value = portfolio(OptionType::EuropeanCall)
            .current_value(date(2020, 5, 1), &series(1000.0))
            .unwrap();
        assert_eq!(value.hedge, 0.0);
    }

    #[test]
    fn test_cash_is_twice_the_option_leg() {
        let snapshot = MarketSnapshot::new(1050.0, 0.28, 0.05, 0.02);
        let p = portfolio(OptionType::EuropeanCall);
        let value = p.current_value(date(2020, 5, 1), &series(1050.0)).unwrap();

        let price = p.option().price_black_scholes(date(2020, 5, 1), &snapshot).unwrap();
        assert_relative_eq!(value.option, 3.0 * price, max_relative = 1e-12);
        assert_relative_eq!(value.cash, -2.0 * value.option, max_relative = 1e-12);
    }

    #[test]
    fn test_digitals_can_be_covered() {
        let value = portfolio(OptionType::DigitalPut)
            .current_value(date(2020, 5, 1), &series(900.0))
            .unwrap();
        assert_eq!(value.hedge, 2700.0);
        assert!(value.option > 0.0);
    }
}
