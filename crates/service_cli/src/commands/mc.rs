//! Monte Carlo command implementation
//!
//! Values an option by simulation and compares it with the closed form.

use pricer_core::market_data::MarketSnapshot;
use pricer_core::types::Date;
use pricer_models::instruments::EquityOption;
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use serde::Serialize;
use tracing::info;

use super::{optional, MarketArgs, OptionArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::output::{fixed, print_rows, Tabular};
use crate::Result;

/// Monte Carlo estimate next to the closed form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloRow {
    pub option: String,
    pub num_paths: usize,
    pub price: f64,
    pub std_error: f64,
    pub lower_95: f64,
    pub upper_95: f64,
    pub closed_form: Option<f64>,
}

impl Tabular for MonteCarloRow {
    fn headers() -> &'static [&'static str] {
        &["Option", "Paths", "MC price", "Std error", "95% low", "95% high", "Closed form"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.option.clone(),
            self.num_paths.to_string(),
            fixed(Some(self.price)),
            fixed(Some(self.std_error)),
            fixed(Some(self.lower_95)),
            fixed(Some(self.upper_95)),
            fixed(self.closed_form),
        ]
    }
}

/// Value `option` under risk-neutral GBM dynamics for the snapshot.
pub fn monte_carlo_row(
    option: &EquityOption,
    as_of: Date,
    snapshot: &MarketSnapshot,
    config: MonteCarloConfig,
) -> Result<MonteCarloRow> {
    let t = option.time_to_expiry(as_of);
    let gbm = GbmParams::new(snapshot.rate - snapshot.div_yield, snapshot.vol).with_initial_value(snapshot.spot);
    let discount_factor = (-snapshot.rate * t).exp();

    let result = MonteCarloPricer::new(config)?.option_value(option, as_of, &gbm, discount_factor)?;
    let half_width = result.confidence_95();

    Ok(MonteCarloRow {
        option: option.to_string(),
        num_paths: result.num_paths,
        price: result.price,
        std_error: result.std_error,
        lower_95: result.price - half_width,
        upper_95: result.price + half_width,
        closed_form: optional(option.price_for_period(t, snapshot))?,
    })
}

/// Run the Monte Carlo command
pub fn run(
    option: &OptionArgs,
    market: &MarketArgs,
    num_paths: Option<usize>,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let option = option.build()?;
    let mc_config = MonteCarloConfig::builder()
        .num_paths(num_paths.unwrap_or(config.num_paths))
        .chunk_size(config.chunk_size)
        .maybe_seed(config.monte_carlo_seed())
        .build()?;
    info!(
        %option,
        num_paths = mc_config.num_paths(),
        seed = ?mc_config.seed(),
        "running Monte Carlo"
    );

    let row = monte_carlo_row(&option, market.as_of, &market.snapshot(), mc_config)?;
    print_rows(format, &[row])
}
