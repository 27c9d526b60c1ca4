//! Grid-based volatility surface.

use super::VolatilitySurface;
use crate::market_data::curves::validate_axis;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{prev_and_next_index, Interpolator, LinearInterpolator};
use num_traits::Float;

/// Volatility surface on a tenor × moneyness grid.
///
/// `vols[i][j]` is the volatility at `tenors[i]` and `moneyness[j]`. Both
/// axes are bracketed independently and the four corner vols handed to
/// [`Interpolator::interpolate_3d`]: the tenor direction first, then
/// moneyness. Outside the grid the bracket collapses onto the boundary,
/// giving flat extrapolation on both axes.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{GridVolSurface, VolatilitySurface};
///
/// let surface = GridVolSurface::linear(
///     &[0.5_f64, 1.0, 2.0, 5.0],
///     &[0.8, 1.0, 1.2],
///     vec![
///         vec![0.35, 0.30, 0.28],
///         vec![0.40, 0.40, 0.40],
///         vec![0.50, 0.45, 0.45],
///         vec![0.50, 0.50, 0.45],
///     ],
/// ).unwrap();
///
/// assert_eq!(surface.volatility(2.0, 1.2).unwrap(), 0.45);
/// assert!((surface.volatility(4.0, 1.1).unwrap() - 0.4666667).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct GridVolSurface<T: Float, I = LinearInterpolator> {
    tenors: Vec<T>,
    moneyness: Vec<T>,
    vols: Vec<Vec<T>>,
    interpolator: I,
}

impl<T: Float, I: Interpolator<T>> GridVolSurface<T, I> {
    /// Construct a surface from axis coordinates and a row-per-tenor grid.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::Empty` - An axis is empty
    /// * `MarketDataError::InvalidGrid` - Unsorted axes, non-finite vols, or a
    ///   grid whose shape does not match the axes
    pub fn new(
        tenors: &[T],
        moneyness: &[T],
        vols: Vec<Vec<T>>,
        interpolator: I,
    ) -> Result<Self, MarketDataError> {
        validate_axis("tenors", tenors)?;
        validate_axis("moneyness", moneyness)?;

        if vols.len() != tenors.len() {
            return Err(MarketDataError::InvalidGrid(format!(
                "expected {} tenor rows, got {}",
                tenors.len(),
                vols.len()
            )));
        }
        for (i, row) in vols.iter().enumerate() {
            if row.len() != moneyness.len() {
                return Err(MarketDataError::InvalidGrid(format!(
                    "row {} has {} vols, expected {}",
                    i,
                    row.len(),
                    moneyness.len()
                )));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(MarketDataError::InvalidGrid(format!(
                    "row {} contains a non-finite vol",
                    i
                )));
            }
        }

        Ok(Self {
            tenors: tenors.to_vec(),
            moneyness: moneyness.to_vec(),
            vols,
            interpolator,
        })
    }

    /// Tenor axis.
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    /// Moneyness axis.
    pub fn moneyness(&self) -> &[T] {
        &self.moneyness
    }
}

impl<T: Float> GridVolSurface<T, LinearInterpolator> {
    /// Construct with bilinear interpolation.
    pub fn linear(tenors: &[T], moneyness: &[T], vols: Vec<Vec<T>>) -> Result<Self, MarketDataError> {
        Self::new(tenors, moneyness, vols, LinearInterpolator)
    }
}

impl<T: Float, I: Interpolator<T>> VolatilitySurface<T> for GridVolSurface<T, I> {
    fn volatility(&self, tenor: T, moneyness: T) -> Result<T, MarketDataError> {
        let (t0, t1) = prev_and_next_index(&self.tenors, tenor)?;
        let (m0, m1) = prev_and_next_index(&self.moneyness, moneyness)?;

        let xs = [self.tenors[t0], self.tenors[t1], self.tenors[t0], self.tenors[t1]];
        let ys = [
            self.moneyness[m0],
            self.moneyness[m0],
            self.moneyness[m1],
            self.moneyness[m1],
        ];
        let zs = [
            self.vols[t0][m0],
            self.vols[t1][m0],
            self.vols[t0][m1],
            self.vols[t1][m1],
        ];

        let vol = self
            .interpolator
            .interpolate_3d(&xs, &ys, &zs, (tenor, moneyness))?;
        Ok(vol)
    }
}
