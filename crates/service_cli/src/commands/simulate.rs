//! Simulate command implementation
//!
//! Prints one seeded arithmetic or geometric Brownian path.

use clap::Args;
use pricer_core::types::{business_day_schedule, Date, BUSINESS_DAYS_IN_YEAR};
use pricer_models::models::GbmParams;
use pricer_pricing::mc::StochasticEngine;
use pricer_pricing::rng::SubtractiveRng;
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::{fixed, print_rows, Tabular};
use crate::Result;

/// Path parameters
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Drift per year
    #[arg(long)]
    pub drift: f64,

    /// Volatility per year
    #[arg(long)]
    pub vol: f64,

    /// Starting value
    #[arg(long, default_value_t = 100.0)]
    pub initial_value: f64,

    /// Number of steps
    #[arg(long, default_value_t = BUSINESS_DAYS_IN_YEAR as usize)]
    pub steps: usize,

    /// Step size in years
    #[arg(long, default_value_t = 1.0 / BUSINESS_DAYS_IN_YEAR as f64)]
    pub dt: f64,

    /// Date the path starts from; steps are then dated on business days
    #[arg(long)]
    pub start: Option<Date>,

    /// Arithmetic Brownian motion instead of geometric
    #[arg(long)]
    pub arithmetic: bool,
}

/// One simulated point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRow {
    pub step: usize,
    pub date: Option<Date>,
    pub value: f64,
}

impl Tabular for PathRow {
    fn headers() -> &'static [&'static str] {
        &["Step", "Date", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.step.to_string(),
            self.date.map_or_else(String::new, |d| d.to_string()),
            fixed(Some(self.value)),
        ]
    }
}

/// Simulate the path described by `args`.
pub fn simulate_path(args: &SimulateArgs, engine: &mut StochasticEngine<SubtractiveRng>) -> Vec<PathRow> {
    let params = GbmParams::new(args.drift, args.vol).with_initial_value(args.initial_value);
    let values = if args.arithmetic {
        engine.brownian_path(&params, args.dt, args.steps)
    } else {
        engine.geometric_brownian_path(&params, args.dt, args.steps)
    };
    let dates = args
        .start
        .map(|start| business_day_schedule(start, args.steps))
        .unwrap_or_default();

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| PathRow {
            step: i + 1,
            date: dates.get(i).copied(),
            value,
        })
        .collect()
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, seed: Option<i32>, format: OutputFormat) -> Result<()> {
    let mut engine = StochasticEngine::seeded(seed);
    let seed = engine.sampler_mut().generator_mut().seed();
    info!(seed, steps = args.steps, arithmetic = args.arithmetic, "simulating path");

    print_rows(format, &simulate_path(args, &mut engine))
}
