//! Annually compounded yield curve.

use super::interpolated::RateGrid;
use super::traits::{check_period, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Yield curve quoting annually compounded spot rates.
///
/// - `forward_rate(t1, t2) = ((1 + r2)^t2 / (1 + r1)^t1)^(1 / (t2 - t1)) - 1`
/// - `discount_factor(t) = (1 + r(t))^-t`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{AnnualCompoundingCurve, YieldCurve};
///
/// let curve = AnnualCompoundingCurve::linear(
///     &[0.5_f64, 1.0, 2.0, 10.0],
///     &[0.0025, 0.005, 0.005, 0.025],
/// ).unwrap();
///
/// assert!((curve.spot_rate(4.0).unwrap() - 0.01).abs() < 1e-12);
/// assert!((curve.forward_rate(1.0, 5.0).unwrap() - 0.01438373).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct AnnualCompoundingCurve<T: Float, I = LinearInterpolator> {
    grid: RateGrid<T, I>,
}

impl<T: Float, I: Interpolator<T>> AnnualCompoundingCurve<T, I> {
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

impl<T: Float> AnnualCompoundingCurve<T, LinearInterpolator> {
    /// Construct with linear interpolation between tenors.
    pub fn linear(tenors: &[T], rates: &[T]) -> Result<Self, MarketDataError> {
        Self::new(tenors, rates, LinearInterpolator)
    }
}

impl<T: Float, I: Interpolator<T>> YieldCurve<T> for AnnualCompoundingCurve<T, I> {
    fn spot_rate(&self, t: T) -> Result<T, MarketDataError> {
        self.grid.spot_rate(t)
    }

    fn forward_rate(&self, start: T, end: T) -> Result<T, MarketDataError> {
        check_period(start, end)?;
        let one = T::one();
        let start_rate = self.grid.spot_rate(start)?;
        let end_rate = self.grid.spot_rate(end)?;

        let growth = (one + end_rate).powf(end) / (one + start_rate).powf(start);
        Ok(growth.powf(one / (end - start)) - one)
    }

    fn discount_factor_at_rate(&self, t: T, rate: T) -> T {
        (T::one() + rate).powf(-t)
    }
}
