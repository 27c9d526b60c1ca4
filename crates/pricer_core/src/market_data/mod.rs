//! Market data structures for pricing and hedging.
//!
//! # Components
//!
//! - [`curves`]: Yield curves (annual and continuous compounding)
//! - [`surfaces`]: Volatility surface over tenor × moneyness
//! - [`series`]: Dated per-underlying snapshots (spot, vol, rate, dividend yield)
//! - [`error`]: Market data error types (MarketDataError)
//!
//! All curve and surface types are generic over `T: Float` and take their
//! interpolation scheme as a type parameter (linear by default).
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{AnnualCompoundingCurve, YieldCurve};
//!
//! let curve = AnnualCompoundingCurve::linear(&[1.0, 2.0], &[0.01, 0.02]).unwrap();
//! let df = curve.discount_factor(2.0).unwrap();
//! assert!((df - 1.02_f64.powf(-2.0)).abs() < 1e-12);
//! ```

pub mod curves;
pub mod error;
pub mod series;
pub mod surfaces;

// Re-export commonly used types
pub use curves::{AnnualCompoundingCurve, ContinuousCompoundingCurve, RateGrid, YieldCurve};
pub use error::MarketDataError;
pub use series::{MarketDataSeries, MarketSnapshot};
pub use surfaces::{GridVolSurface, VolatilitySurface};
