//! Bracketing search on sorted grids.

use crate::types::InterpolationError;

/// Find the indices of the grid points bracketing `x`.
///
/// Uses binary search on an ascending slice and returns:
/// - `(i, i)` when `x` equals `sorted[i]`
/// - `(0, 0)` when `x` is below the first point
/// - `(n - 1, n - 1)` when `x` is above the last point
/// - `(i - 1, i)` when `sorted[i - 1] < x < sorted[i]`
///
/// # Errors
///
/// `InterpolationError::InsufficientData` for an empty grid.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::prev_and_next_index;
///
/// let grid = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(prev_and_next_index(&grid, -1.2).unwrap(), (0, 0));
/// assert_eq!(prev_and_next_index(&grid, 8.2).unwrap(), (4, 4));
/// assert_eq!(prev_and_next_index(&grid, 2.0).unwrap(), (1, 1));
/// assert_eq!(prev_and_next_index(&grid, 3.3).unwrap(), (2, 3));
/// ```
pub fn prev_and_next_index<T>(sorted: &[T], x: T) -> Result<(usize, usize), InterpolationError>
where
    T: PartialOrd + Copy,
{
    let n = sorted.len();
    if n == 0 {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }

    // First index whose value is >= x
    let pos = sorted.partition_point(|&v| v < x);

    if pos < n && sorted[pos] == x {
        Ok((pos, pos))
    } else if pos == 0 {
        Ok((0, 0))
    } else if pos == n {
        Ok((n - 1, n - 1))
    } else {
        Ok((pos - 1, pos))
    }
}
