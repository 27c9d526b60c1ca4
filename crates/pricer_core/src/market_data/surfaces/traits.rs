//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Implied volatility lookup over (tenor, moneyness).
///
/// # Contract
///
/// - `volatility(tenor, moneyness)` returns σ for the given time to expiry
///   (years) and moneyness (strike over spot)
/// - Grid nodes are returned unchanged; queries outside the grid are
///   flat-extrapolated from the boundary
pub trait VolatilitySurface<T: Float> {
    /// Return the implied volatility at `(tenor, moneyness)`.
    fn volatility(&self, tenor: T, moneyness: T) -> Result<T, MarketDataError>;
}
