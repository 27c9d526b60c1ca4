//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Linear interpolation strategy.
///
/// 2D: `y = ((x - x0) * y1 + (x1 - x) * y0) / (x1 - x0)`, returning `y0`
/// when the two abscissae coincide (the flat-extrapolation case produced by
/// bracketing outside a grid).
///
/// 3D: interpolates along x on the lower and upper corner pairs, then along
/// y between the two results.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let y: f64 = LinearInterpolator.interpolate_2d(&[1.0, 2.0], &[2.1, -0.8], 1.2).unwrap();
/// assert!((y - 1.52).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolator;

fn check_count(got: usize, expected: usize) -> Result<(), InterpolationError> {
    if got != expected {
        return Err(InterpolationError::InvalidArgumentCount { expected, got });
    }
    Ok(())
}

impl<T: Float> Interpolator<T> for LinearInterpolator {
    fn interpolate_2d(&self, xs: &[T], ys: &[T], x: T) -> Result<T, InterpolationError> {
        check_count(xs.len(), 2)?;
        check_count(ys.len(), 2)?;

        let (x0, x1) = (xs[0], xs[1]);
        let (y0, y1) = (ys[0], ys[1]);

        if x1 == x0 {
            return Ok(y0);
        }
        Ok(((x - x0) * y1 + (x1 - x) * y0) / (x1 - x0))
    }

    fn interpolate_3d(
        &self,
        xs: &[T],
        ys: &[T],
        zs: &[T],
        point: (T, T),
    ) -> Result<T, InterpolationError> {
        check_count(xs.len(), 4)?;
        check_count(ys.len(), 4)?;
        check_count(zs.len(), 4)?;

        let (x, y) = point;
        let lower = self.interpolate_2d(&[xs[0], xs[1]], &[zs[0], zs[1]], x)?;
        let upper = self.interpolate_2d(&[xs[2], xs[3]], &[zs[2], zs[3]], x)?;

        self.interpolate_2d(&[ys[0], ys[2]], &[lower, upper], y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================================================
    // 2D
    // ========================================================================

    #[test]
    fn test_2d_at_upper_point() {
        let y = LinearInterpolator
            .interpolate_2d(&[0.0, 5.0], &[2.0, 7.0], 5.0)
            .unwrap();
        assert_relative_eq!(y, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_2d_degenerate_abscissae() {
        let y = LinearInterpolator
            .interpolate_2d(&[-2.0, -2.0], &[-3.0, -3.0], -2.0)
            .unwrap();
        assert_eq!(y, -3.0);
    }

    #[test]
    fn test_2d_degenerate_returns_first_ordinate() {
        let y = LinearInterpolator
            .interpolate_2d(&[1.0, 1.0], &[0.4, 0.9], 3.0)
            .unwrap();
        assert_eq!(y, 0.4);
    }

    #[test]
    fn test_2d_negative_abscissa() {
        let y = LinearInterpolator
            .interpolate_2d(&[-2.0, 1.5], &[3.2, 12.5], 0.5)
            .unwrap();
        assert_relative_eq!(y, 9.842857, epsilon = 1e-6);
    }

    #[test]
    fn test_2d_decreasing_ordinates() {
        let y = LinearInterpolator
            .interpolate_2d(&[1.0, 2.0], &[2.1, -0.8], 1.2)
            .unwrap();
        assert_relative_eq!(y, 1.52, epsilon = 1e-12);
    }

    #[test]
    fn test_2d_wrong_count() {
        let result = LinearInterpolator.interpolate_2d(&[1.0, 2.0, 3.0], &[2.1, -0.8, 0.2], 1.2);
        assert_eq!(
            result,
            Err(InterpolationError::InvalidArgumentCount {
                expected: 2,
                got: 3
            })
        );

        let result = LinearInterpolator.interpolate_2d(&[1.0, 2.0], &[2.1], 1.2);
        assert!(result.is_err());
    }

    // ========================================================================
    // 3D
    // ========================================================================

    const XS: [f64; 4] = [1.0, 3.5, 1.0, 3.5];
    const YS: [f64; 4] = [-0.8, -0.8, 1.2, 1.2];
    const ZS: [f64; 4] = [1.2, 2.2, -3.4, 5.0];

    #[test]
    fn test_3d_interior_point() {
        let z = LinearInterpolator
            .interpolate_3d(&XS, &YS, &ZS, (2.1, 0.1))
            .unwrap();
        assert_relative_eq!(z, 1.0352, epsilon = 1e-6);
    }

    #[test]
    fn test_3d_corner_returns_node() {
        let z = LinearInterpolator
            .interpolate_3d(&XS, &YS, &ZS, (3.5, 1.2))
            .unwrap();
        assert_relative_eq!(z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_3d_too_many_x_points() {
        let xs = [1.0, 3.5, 1.0, 3.5, 2.0];
        assert!(LinearInterpolator
            .interpolate_3d(&xs, &YS, &ZS, (2.1, 0.1))
            .is_err());
    }

    #[test]
    fn test_3d_too_few_z_points() {
        let zs = [1.2, 2.2, -3.4];
        assert_eq!(
            LinearInterpolator.interpolate_3d(&XS, &YS, &zs, (2.1, 0.1)),
            Err(InterpolationError::InvalidArgumentCount {
                expected: 4,
                got: 3
            })
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_2d_stays_within_endpoints(
                x0 in -100.0f64..100.0,
                width in 0.01f64..50.0,
                y0 in -10.0f64..10.0,
                y1 in -10.0f64..10.0,
                frac in 0.0f64..=1.0,
            ) {
                let x1 = x0 + width;
                let x = x0 + frac * width;
                let y = LinearInterpolator.interpolate_2d(&[x0, x1], &[y0, y1], x).unwrap();
                prop_assert!(y >= y0.min(y1) - 1e-9);
                prop_assert!(y <= y0.max(y1) + 1e-9);
            }
        }
    }
}
