//! Calendar and error types.
//!
//! This module provides:
//! - `time`: Dates, weekday-only business-day arithmetic and year fractions
//! - `error`: Structured error types for pricing, date and interpolation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] and the calendar functions from `time`
//! - [`PricingError`], [`DateError`], [`InterpolationError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, InterpolationError, PricingError};
pub use time::{
    business_day_schedule, business_days_between, business_year_fraction, year_fraction,
    year_fraction_with_basis, Date, DayCountConvention, BUSINESS_DAYS_IN_YEAR, DAYS_IN_YEAR,
};
