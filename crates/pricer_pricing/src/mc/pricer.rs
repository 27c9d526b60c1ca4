//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo valuation
//! of equity options under GBM.
//!
//! # Overview
//!
//! [`MonteCarloPricer::option_value`] coordinates:
//! 1. Path length: business days from the valuation date to expiry
//! 2. Parallel simulation of terminal prices in fixed-size chunks
//! 3. Payoff evaluation on each terminal price
//! 4. Discounting and aggregation into a [`PricingResult`]
//!
//! # Determinism
//!
//! Chunk `k` draws from its own [`PricerRng`] seeded with `seed + k`, and
//! chunk totals are summed in chunk order, so a fixed seed gives the same
//! result whatever the size of the rayon thread pool.

use pricer_core::types::{business_days_between, Date, BUSINESS_DAYS_IN_YEAR};
use pricer_models::instruments::EquityOption;
use pricer_models::models::GbmParams;
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::MonteCarloConfig;
use super::error::{ConfigError, SimulationError};
use super::paths::{check_price_params, StochasticEngine};
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     num_paths: 10_000,
/// };
///
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of simulated paths.
    pub num_paths: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running payoff moments of one chunk.
#[derive(Clone, Copy, Debug, Default)]
struct PayoffSums {
    sum: f64,
    sum_sq: f64,
}

impl PayoffSums {
    fn add(mut self, payoff: f64) -> Self {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }
}

/// Monte Carlo pricing engine.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{EquityOptionFactory, OptionType};
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let as_of = Date::from_ymd(2020, 5, 1).unwrap();
/// let expiry = Date::from_ymd(2020, 6, 30).unwrap();
/// let call = EquityOptionFactory::create(OptionType::EuropeanCall, "IDX", expiry, 100.0, "USD").unwrap();
///
/// let config = MonteCarloConfig::builder().num_paths(2_000).seed(42).build().unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let gbm = GbmParams::new(0.04, 0.2).with_initial_value(100.0);
/// let result = pricer.option_value(&call, as_of, &gbm, 0.99).unwrap();
/// assert!(result.price > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Discounted expected payoff of `option` under `gbm`, valued on `as_of`.
    ///
    /// Each path runs one step per business day from `as_of` to expiry. When
    /// that count is zero the option pays on `gbm.initial_value` and the
    /// estimate has no sampling error.
    ///
    /// # Errors
    ///
    /// - `SimulationError::InvalidModel` for a non-positive initial value,
    ///   negative volatility or non-finite inputs
    /// - `SimulationError::InvalidDiscountFactor` unless `discount_factor`
    ///   is finite and positive
    pub fn option_value(
        &self,
        option: &EquityOption,
        as_of: Date,
        gbm: &GbmParams,
        discount_factor: f64,
    ) -> Result<PricingResult, SimulationError> {
        check_price_params(gbm)?;
        if !discount_factor.is_finite() || discount_factor <= 0.0 {
            return Err(SimulationError::InvalidDiscountFactor(discount_factor));
        }

        let num_paths = self.config.num_paths();
        let steps = business_days_between(as_of, option.expiry()) as usize;

        if steps == 0 {
            warn!(
                %as_of,
                expiry = %option.expiry(),
                "no business days to expiry; valuing on the initial price"
            );
            return Ok(PricingResult {
                price: discount_factor * option.payoff_at(gbm.initial_value),
                std_error: 0.0,
                num_paths,
            });
        }

        let dt = 1.0 / BUSINESS_DAYS_IN_YEAR as f64;
        let chunk_size = self.config.chunk_size();
        let base_seed = self.config.seed().unwrap_or(0);

        debug!(
            option = %option,
            %as_of,
            steps,
            dt,
            num_paths,
            chunks = self.config.num_chunks(),
            seed = base_seed,
            drift = gbm.drift,
            vol = gbm.vol,
            initial_value = gbm.initial_value,
            "monte carlo valuation"
        );

        let chunk_sums: Vec<PayoffSums> = (0..self.config.num_chunks())
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * chunk_size;
                let paths = chunk_size.min(num_paths - start);
                let rng = PricerRng::from_seed(base_seed.wrapping_add(chunk as u64));
                let mut engine = StochasticEngine::new(rng);

                (0..paths).fold(PayoffSums::default(), |acc, _| {
                    let terminal = engine.terminal_value(gbm, dt, steps);
                    acc.add(option.payoff_at(terminal))
                })
            })
            .collect();

        let totals = chunk_sums
            .into_iter()
            .fold(PayoffSums::default(), PayoffSums::merge);

        let n = num_paths as f64;
        let mean = totals.sum / n;
        let std_error = if num_paths > 1 {
            let variance = ((totals.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
            (variance / n).sqrt()
        } else {
            0.0
        };

        let result = PricingResult {
            price: mean * discount_factor,
            std_error: std_error * discount_factor,
            num_paths,
        };
        debug!(price = result.price, std_error = result.std_error, "monte carlo result");
        Ok(result)
    }
}
