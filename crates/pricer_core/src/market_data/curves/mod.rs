//! Yield curves over an interpolated tenor grid.
//!
//! This module provides:
//! - [`YieldCurve`]: Spot, forward and discount-factor contract
//! - [`RateGrid`]: Tenor→rate grid with pluggable interpolation
//! - [`AnnualCompoundingCurve`]: Annually compounded rates
//! - [`ContinuousCompoundingCurve`]: Continuously compounded rates

mod annual;
mod continuous;
mod interpolated;
mod traits;

pub use annual::AnnualCompoundingCurve;
pub use continuous::ContinuousCompoundingCurve;
pub use interpolated::RateGrid;
pub(crate) use interpolated::validate_axis;
pub use traits::YieldCurve;
