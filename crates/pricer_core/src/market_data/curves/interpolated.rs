//! Tenor grid shared by the compounding curves.

use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{prev_and_next_index, Interpolator};
use num_traits::Float;

/// Sorted tenor→rate grid with an interpolation strategy.
///
/// Spot rates are bracketed with [`prev_and_next_index`], so a query on a
/// node returns the stored rate and a query outside the grid returns the
/// nearest endpoint rate (flat extrapolation).
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::RateGrid;
/// use pricer_core::math::interpolators::LinearInterpolator;
///
/// let grid = RateGrid::new(&[1.0_f64, 2.0], &[0.01, 0.03], LinearInterpolator).unwrap();
/// assert!((grid.spot_rate(1.5).unwrap() - 0.02).abs() < 1e-12);
/// assert_eq!(grid.spot_rate(5.0).unwrap(), 0.03);
/// ```
#[derive(Debug, Clone)]
pub struct RateGrid<T: Float, I> {
    tenors: Vec<T>,
    rates: Vec<T>,
    interpolator: I,
}

impl<T: Float, I: Interpolator<T>> RateGrid<T, I> {
    /// Construct a grid from tenors (strictly increasing) and matching rates.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::Empty` - No tenors supplied
    /// * `MarketDataError::InvalidGrid` - Length mismatch, non-finite values or
    ///   tenors that are not strictly increasing
    pub fn new(tenors: &[T], rates: &[T], interpolator: I) -> Result<Self, MarketDataError> {
        validate_axis("tenors", tenors)?;
        if rates.len() != tenors.len() {
            return Err(MarketDataError::InvalidGrid(format!(
                "{} tenors but {} rates",
                tenors.len(),
                rates.len()
            )));
        }
        if rates.iter().any(|r| !r.is_finite()) {
            return Err(MarketDataError::InvalidGrid(
                "rates must be finite".to_string(),
            ));
        }

        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            interpolator,
        })
    }

    /// Interpolated spot rate at `tenor`.
    pub fn spot_rate(&self, tenor: T) -> Result<T, MarketDataError> {
        let (lo, hi) = prev_and_next_index(&self.tenors, tenor)?;
        let rate = self.interpolator.interpolate_2d(
            &[self.tenors[lo], self.tenors[hi]],
            &[self.rates[lo], self.rates[hi]],
            tenor,
        )?;
        Ok(rate)
    }

    /// Grid tenors.
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    /// Grid rates, aligned with [`RateGrid::tenors`].
    pub fn rates(&self) -> &[T] {
        &self.rates
    }
}

/// Validate a grid axis: non-empty, finite and strictly increasing.
pub(crate) fn validate_axis<T: Float>(name: &str, axis: &[T]) -> Result<(), MarketDataError> {
    if axis.is_empty() {
        return Err(MarketDataError::Empty(format!("{} axis", name)));
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(MarketDataError::InvalidGrid(format!(
            "{} must be finite",
            name
        )));
    }
    if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(MarketDataError::InvalidGrid(format!(
            "{} must be strictly increasing (index {})",
            name,
            i + 1
        )));
    }
    Ok(())
}
