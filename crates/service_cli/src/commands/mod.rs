//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Option and market
//! arguments shared between commands live here.

pub mod check;
pub mod hedge;
pub mod mc;
pub mod price;
pub mod simulate;

use clap::Args;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::{EquityOption, EquityOptionFactory, OptionTerms, OptionType};

use crate::Result;

/// Option term sheet
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    /// Option type (call, put, binary-call, binary-put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry: Date,

    /// Underlying name
    #[arg(long, default_value = "IDX")]
    pub underlying: String,

    /// Discount curve name
    #[arg(long, default_value = "USD")]
    pub curve: String,

    /// Settle digitals in the asset instead of cash
    #[arg(long)]
    pub asset_settled: bool,
}

impl OptionArgs {
    /// Build the option described by the arguments.
    pub fn build(&self) -> Result<EquityOption> {
        if self.asset_settled && self.option_type.is_digital() {
            let terms = OptionTerms::new(
                &self.underlying,
                self.expiry,
                self.strike,
                self.option_type.is_call(),
                &self.curve,
            )?;
            return Ok(EquityOption::Digital {
                terms,
                asset_settled: true,
            });
        }
        Ok(EquityOptionFactory::create(
            self.option_type,
            &self.underlying,
            self.expiry,
            self.strike,
            &self.curve,
        )?)
    }
}

/// Market state on the valuation date
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Valuation date (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Date,

    /// Spot price
    #[arg(long)]
    pub spot: f64,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,

    /// Continuously compounded interest rate
    #[arg(long, default_value_t = 0.0)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0)]
    pub div_yield: f64,
}

impl MarketArgs {
    /// Snapshot for the valuation date.
    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot::new(self.spot, self.vol, self.rate, self.div_yield)
    }
}

/// `Some(value)`, or `None` when the result is a defined gap rather than a
/// failure: an unsupported Greek, or no time left to expiry.
pub(crate) fn optional(result: std::result::Result<f64, PricingError>) -> Result<Option<f64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PricingError::UnsupportedGreek { .. } | PricingError::DegenerateTime { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
