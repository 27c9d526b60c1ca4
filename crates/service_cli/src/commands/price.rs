//! Price command implementation
//!
//! Closed-form Black-Scholes value and Greeks for one option.

use pricer_core::market_data::MarketSnapshot;
use pricer_core::types::Date;
use pricer_models::instruments::EquityOption;
use serde::Serialize;
use tracing::info;

use super::{optional, MarketArgs, OptionArgs};
use crate::config::OutputFormat;
use crate::output::{fixed, print_rows, Tabular};
use crate::Result;

/// Closed-form valuation of one option
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub option: String,
    pub time_to_expiry: f64,
    pub price: f64,
    pub delta: f64,
    pub gamma: Option<f64>,
    pub vega: Option<f64>,
    pub theta: Option<f64>,
    pub rho: Option<f64>,
}

impl Tabular for PriceRow {
    fn headers() -> &'static [&'static str] {
        &["Option", "T", "Price", "Delta", "Gamma", "Vega", "Theta/day", "Rho"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.option.clone(),
            fixed(Some(self.time_to_expiry)),
            fixed(Some(self.price)),
            fixed(Some(self.delta)),
            fixed(self.gamma),
            fixed(self.vega),
            fixed(self.theta),
            fixed(self.rho),
        ]
    }
}

/// Value `option` at `as_of`. Greeks the variant does not support are `None`.
pub fn price_row(option: &EquityOption, as_of: Date, snapshot: &MarketSnapshot) -> Result<PriceRow> {
    let t = option.time_to_expiry(as_of);

    Ok(PriceRow {
        option: option.to_string(),
        time_to_expiry: t,
        price: option.price_for_period(t, snapshot)?,
        delta: option.delta_for_period(t, snapshot)?,
        gamma: optional(option.gamma_for_period(t, snapshot))?,
        vega: optional(option.vega_for_period(t, snapshot))?,
        theta: optional(option.theta_for_period(t, snapshot))?,
        rho: optional(option.rho_for_period(t, snapshot))?,
    })
}

/// Run the price command
pub fn run(option: &OptionArgs, market: &MarketArgs, format: OutputFormat) -> Result<()> {
    let option = option.build()?;
    info!(%option, as_of = %market.as_of, spot = market.spot, "pricing");

    let row = price_row(&option, market.as_of, &market.snapshot())?;
    print_rows(format, &[row])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_abs_diff_eq;
    use pricer_core::types::PricingError;
    use pricer_models::instruments::{EquityOptionFactory, OptionType};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::new(1020.0, 0.28, 0.05, 0.02)
    }

    #[test]
    fn test_european_put_row() {
        let put = EquityOptionFactory::create(OptionType::EuropeanPut, "IDX", date(2020, 6, 30), 1000.0, "USD")
            .unwrap();
        let row = price_row(&put, date(2020, 5, 1), &snapshot()).unwrap();

        assert_abs_diff_eq!(row.price, 103.641378 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(row.delta, -1195.805281 / 3060.0, epsilon = 1e-6);
        assert!(row.gamma.unwrap() > 0.0);
        assert!(row.vega.unwrap() > 0.0);
        assert!(row.rho.unwrap() < 0.0);
    }

    #[test]
    fn test_digital_has_no_second_order_greeks() {
        let digital = EquityOptionFactory::create(OptionType::DigitalCall, "IDX", date(2020, 6, 30), 1000.0, "USD")
            .unwrap();
        let row = price_row(&digital, date(2020, 5, 1), &snapshot()).unwrap();

        assert!(row.price > 0.0 && row.price < 1.0);
        assert_eq!((row.gamma, row.vega, row.theta, row.rho), (None, None, None, None));
    }

    #[test]
    fn test_expired_option_is_error() {
        let call = EquityOptionFactory::create(OptionType::EuropeanCall, "IDX", date(2020, 6, 30), 1000.0, "USD")
            .unwrap();
        assert!(matches!(
            price_row(&call, date(2020, 6, 30), &snapshot()),
            Err(CliError::Pricing(PricingError::DegenerateTime { .. }))
        ));
    }
}
