//! Hedged portfolio state and the one-day carry recurrence.

use std::iter::Sum;
use std::ops::Add;

use pricer_core::market_data::MarketDataSeries;
use pricer_core::types::{business_days_between, Date, BUSINESS_DAYS_IN_YEAR};
use pricer_models::instruments::EquityOption;

use super::error::HedgingError;

/// Value of the three legs of a hedged position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioValue {
    /// Option position: contracts × option price
    pub option: f64,
    /// Stock hedge
    pub hedge: f64,
    /// Bank account
    pub cash: f64,
}

impl PortfolioValue {
    /// Build from the three legs.
    pub fn new(option: f64, hedge: f64, cash: f64) -> Self {
        Self { option, hedge, cash }
    }

    /// Sum of the legs.
    pub fn total(&self) -> f64 {
        self.option + self.hedge + self.cash
    }

    /// Leg-by-leg change from `self` to `later`.
    pub fn change_to(&self, later: &PortfolioValue) -> PnlAttribution {
        PnlAttribution {
            option: later.option - self.option,
            hedge: later.hedge - self.hedge,
            cash: later.cash - self.cash,
        }
    }
}

/// One period's P&L split by leg.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlAttribution {
    /// Change in the option position
    pub option: f64,
    /// Change in the stock hedge
    pub hedge: f64,
    /// Change in the bank account
    pub cash: f64,
}

impl PnlAttribution {
    /// Total P&L across the legs.
    pub fn total(&self) -> f64 {
        self.option + self.hedge + self.cash
    }
}

impl Add for PnlAttribution {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            option: self.option + rhs.option,
            hedge: self.hedge + rhs.hedge,
            cash: self.cash + rhs.cash,
        }
    }
}

impl Sum for PnlAttribution {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// An option position together with the rule used to hedge it.
///
/// Implementors are stateless: the position is rebuilt from market data on
/// every re-hedge date, and [`next_value`](Self::next_value) carries it one
/// period forward without re-hedging.
pub trait HedgedPortfolio {
    /// The hedged option.
    fn option(&self) -> &EquityOption;

    /// Number of option contracts held; negative when short.
    fn contracts(&self) -> i32;

    /// Freshly re-hedged position on `date`.
    ///
    /// # Errors
    /// Pricing or lookup failures for `date`.
    fn current_value(&self, date: Date, history: &MarketDataSeries) -> Result<PortfolioValue, HedgingError>;

    /// Expiry of the hedged option.
    fn expiry(&self) -> Date {
        self.option().expiry()
    }

    /// Position carried from `current` to `next` without re-hedging.
    ///
    /// With `Δt` the business-day year fraction between the dates:
    ///
    /// ```text
    /// option' = contracts × price(next)
    /// hedge'  = hedge × S(next)/S(current) × exp(q(current)·Δt)
    /// cash'   = cash × exp(r(current)·Δt)
    /// ```
    ///
    /// # Errors
    /// Pricing or lookup failures for either date.
    fn next_value(
        &self,
        current: Date,
        next: Date,
        history: &MarketDataSeries,
        hedge: f64,
        cash: f64,
    ) -> Result<PortfolioValue, HedgingError> {
        let dt = business_days_between(current, next) as f64 / BUSINESS_DAYS_IN_YEAR as f64;
        let today = history.get(current)?;
        let tomorrow = history.get(next)?;

        let option = f64::from(self.contracts()) * self.option().current_price(next, history)?;
        let hedge = hedge * (tomorrow.spot / today.spot) * (today.div_yield * dt).exp();
        let cash = cash * (today.rate * dt).exp();

        Ok(PortfolioValue::new(option, hedge, cash))
    }
}
