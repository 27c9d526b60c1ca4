//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve over a tenor grid of spot rates.
///
/// Implementations differ only in their compounding convention, which
/// changes the forward-rate and discount-factor formulas; spot rates are
/// always read off the grid by bracketing and interpolation with flat
/// extrapolation.
///
/// # Contract
///
/// - `spot_rate(t)` returns the grid rate at tenor `t`, unchanged at a node
///   and equal to the nearest endpoint outside the grid
/// - `forward_rate(t1, t2)` returns the annualised rate between `t1` and `t2`
/// - `discount_factor(t)` discounts with the interpolated spot rate at `t`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{ContinuousCompoundingCurve, YieldCurve};
///
/// let curve = ContinuousCompoundingCurve::linear(&[1.0_f64], &[0.03]).unwrap();
///
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - 0.941765).abs() < 1e-6);
///
/// let fwd = curve.forward_rate(2.5, 4.0).unwrap();
/// assert!((fwd - 0.03).abs() < 1e-12);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the interpolated spot rate for tenor `t` (years).
    fn spot_rate(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the annualised forward rate between `start` and `end` (years).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidPeriod` when `end <= start`.
    fn forward_rate(&self, start: T, end: T) -> Result<T, MarketDataError>;

    /// Discount factor for tenor `t` at an explicitly supplied rate.
    fn discount_factor_at_rate(&self, t: T, rate: T) -> T;

    /// Discount factor for tenor `t` using the curve's own spot rate.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        let rate = self.spot_rate(t)?;
        Ok(self.discount_factor_at_rate(t, rate))
    }
}

/// Reject forward periods of non-positive length.
pub(crate) fn check_period<T: Float>(start: T, end: T) -> Result<(), MarketDataError> {
    if end <= start {
        return Err(MarketDataError::InvalidPeriod {
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
