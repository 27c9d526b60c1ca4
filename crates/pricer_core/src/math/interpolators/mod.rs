//! Interpolation methods for curves and surfaces.
//!
//! Interpolation is split into two steps:
//!
//! 1. [`prev_and_next_index`] brackets a query point on a sorted grid, with
//!    flat extrapolation built in (both indices collapse to the nearest
//!    endpoint outside the grid, or to the exact node on a hit).
//! 2. An [`Interpolator`] strategy combines the bracketing points: two
//!    `(x, y)` pairs in 2D, or four corner points in 3D.
//!
//! Curves and surfaces hold the strategy as a type parameter, so the scheme
//! can be swapped without touching the bracketing logic.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{prev_and_next_index, Interpolator, LinearInterpolator};
//!
//! let tenors = [0.5_f64, 1.0, 2.0];
//! let rates = [0.01_f64, 0.02, 0.04];
//!
//! let (lo, hi) = prev_and_next_index(&tenors, 1.5).unwrap();
//! assert_eq!((lo, hi), (1, 2));
//!
//! let r: f64 = LinearInterpolator
//!     .interpolate_2d(&[tenors[lo], tenors[hi]], &[rates[lo], rates[hi]], 1.5)
//!     .unwrap();
//! assert!((r - 0.03).abs() < 1e-12);
//! ```

mod linear;
mod search;

pub use linear::LinearInterpolator;
pub use search::prev_and_next_index;

use crate::types::InterpolationError;
use num_traits::Float;

/// Interpolation strategy over bracketing points.
///
/// Implementations must reject coordinate lists of the wrong cardinality
/// with [`InterpolationError::InvalidArgumentCount`] rather than coercing them.
pub trait Interpolator<T: Float> {
    /// Interpolate between exactly two `(x, y)` points at `x`.
    fn interpolate_2d(&self, xs: &[T], ys: &[T], x: T) -> Result<T, InterpolationError>;

    /// Interpolate over exactly four corner points at `point = (x, y)`.
    ///
    /// Corners are ordered `(x0, y0), (x1, y0), (x0, y1), (x1, y1)`: the first
    /// pair shares the lower y coordinate, the second pair the upper one.
    fn interpolate_3d(
        &self,
        xs: &[T],
        ys: &[T],
        zs: &[T],
        point: (T, T),
    ) -> Result<T, InterpolationError>;
}
