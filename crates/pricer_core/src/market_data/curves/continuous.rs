//! Continuously compounded yield curve.

use super::interpolated::RateGrid;
use super::traits::{check_period, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Yield curve quoting continuously compounded spot rates.
///
/// - `forward_rate(t1, t2) = (r2 * t2 - r1 * t1) / (t2 - t1)`
/// - `discount_factor(t) = exp(-t * r(t))`
#[derive(Debug, Clone)]
pub struct ContinuousCompoundingCurve<T: Float, I = LinearInterpolator> {
    grid: RateGrid<T, I>,
}

impl<T: Float, I: Interpolator<T>> ContinuousCompoundingCurve<T, I> {
    /// Construct from tenors, rates and an interpolation strategy.
    pub fn new(tenors: &[T], rates: &[T], interpolator: I) -> Result<Self, MarketDataError> {
        Ok(Self {
            grid: RateGrid::new(tenors, rates, interpolator)?,
        })
    }

    /// Underlying tenor grid.
    pub fn grid(&self) -> &RateGrid<T, I> {
        &self.grid
    }
}

impl<T: Float> ContinuousCompoundingCurve<T, LinearInterpolator> {
    /// Construct with linear interpolation between tenors.
    pub fn linear(tenors: &[T], rates: &[T]) -> Result<Self, MarketDataError> {
        Self::new(tenors, rates, LinearInterpolator)
    }
}

impl<T: Float, I: Interpolator<T>> YieldCurve<T> for ContinuousCompoundingCurve<T, I> {
    fn spot_rate(&self, t: T) -> Result<T, MarketDataError> {
        self.grid.spot_rate(t)
    }

    fn forward_rate(&self, start: T, end: T) -> Result<T, MarketDataError> {
        check_period(start, end)?;
        let start_rate = self.grid.spot_rate(start)?;
        let end_rate = self.grid.spot_rate(end)?;
        Ok((end_rate * end - start_rate * start) / (end - start))
    }

    fn discount_factor_at_rate(&self, t: T, rate: T) -> T {
        (-t * rate).exp()
    }
}
