//! Path generation for Monte Carlo simulation.
//!
//! [`StochasticEngine`] builds arithmetic and geometric Brownian paths from
//! the normal draws of its [`Sampler`]. Paths start from an implicit origin
//! `X = 0` that is not part of the output:
//!
//! ```text
//! X[i] = X[i-1] + μ·dt + σ·√dt·Z[i],    X[-1] = 0
//! S[i] = S(0)·exp(X[i])                 (with μ replaced by μ - σ²/2)
//! ```
//!
//! A path of `length` points therefore consumes exactly `length` normal
//! draws, and consecutive paths from one engine continue the same stream.

use pricer_core::types::{business_day_schedule, Date, BUSINESS_DAYS_IN_YEAR};
use pricer_models::models::GbmParams;

use super::error::SimulationError;
use crate::rng::{Sampler, SubtractiveRng, UniformGenerator};

/// Generator of Brownian and geometric Brownian paths.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::StochasticEngine;
///
/// let mut engine = StochasticEngine::seeded(Some(1234));
/// let gbm = GbmParams::new(0.05, 0.2).with_initial_value(50.0);
///
/// let path = engine.geometric_brownian_path(&gbm, 1.0 / 12.0, 7);
/// assert_eq!(path.len(), 7);
/// assert!((path[0] - 49.390526).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct StochasticEngine<G> {
    sampler: Sampler<G>,
}

impl StochasticEngine<SubtractiveRng> {
    /// Engine over a [`SubtractiveRng`]; `None` seeds from entropy.
    pub fn seeded(seed: Option<i32>) -> Self {
        Self::new(SubtractiveRng::new(seed))
    }
}

impl<G: UniformGenerator> StochasticEngine<G> {
    /// Engine drawing from `generator`.
    pub fn new(generator: G) -> Self {
        Self::with_sampler(Sampler::new(generator))
    }

    /// Engine around an existing sampler, continuing its stream.
    pub fn with_sampler(sampler: Sampler<G>) -> Self {
        Self { sampler }
    }

    /// Mutable access to the sampler.
    pub fn sampler_mut(&mut self) -> &mut Sampler<G> {
        &mut self.sampler
    }

    /// `length` observations of an arithmetic Brownian motion with the given
    /// drift and volatility, spaced `dt` years apart.
    pub fn brownian_path(&mut self, params: &GbmParams, dt: f64, length: usize) -> Vec<f64> {
        let draws = self.sampler.standard_normal(length);
        draws
            .into_iter()
            .scan(0.0, |level, z| {
                *level += params.increment(dt, z);
                Some(*level)
            })
            .collect()
    }

    /// `length` observations of a geometric Brownian motion starting from
    /// `params.initial_value`.
    pub fn geometric_brownian_path(&mut self, params: &GbmParams, dt: f64, length: usize) -> Vec<f64> {
        let initial_value = params.initial_value;
        self.brownian_path(&params.ito_adjusted(), dt, length)
            .into_iter()
            .map(|x| initial_value * x.exp())
            .collect()
    }

    /// Standard Brownian motion: drift 0, volatility 1.
    pub fn standard_brownian_path(&mut self, dt: f64, length: usize) -> Vec<f64> {
        self.brownian_path(&GbmParams::standard(), dt, length)
    }

    /// Last point of a geometric path of `length` steps, without
    /// materialising the path.
    ///
    /// Consumes the same draws as [`geometric_brownian_path`](Self::geometric_brownian_path).
    /// A zero-length path ends where it starts.
    pub fn terminal_value(&mut self, params: &GbmParams, dt: f64, length: usize) -> f64 {
        let adjusted = params.ito_adjusted();
        let mut level = 0.0;
        for _ in 0..length {
            level += adjusted.increment(dt, self.sampler.next_standard_normal());
        }
        params.initial_value * level.exp()
    }

    /// Daily geometric path dated on the `length` business days following
    /// `start`.
    pub fn dated_geometric_path(&mut self, params: &GbmParams, start: Date, length: usize) -> Vec<(Date, f64)> {
        let dt = 1.0 / BUSINESS_DAYS_IN_YEAR as f64;
        let values = self.geometric_brownian_path(params, dt, length);
        business_day_schedule(start, length).into_iter().zip(values).collect()
    }
}

/// Rejects parameters that cannot drive a price path.
pub(crate) fn check_price_params(params: &GbmParams) -> Result<(), SimulationError> {
    let reason = if !params.drift.is_finite() {
        Some(format!("drift must be finite, got {}", params.drift))
    } else if !params.vol.is_finite() || params.vol < 0.0 {
        Some(format!("volatility must be non-negative, got {}", params.vol))
    } else if !params.initial_value.is_finite() || params.initial_value <= 0.0 {
        Some(format!("initial value must be positive, got {}", params.initial_value))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SimulationError::InvalidModel { reason }),
        None => Ok(()),
    }
}
