//! Volatility surface abstractions for option pricing.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Trait for implied volatility lookup
//! - [`GridVolSurface`]: Tenor × moneyness grid with flat extrapolation

mod interpolated;
mod traits;

pub use interpolated::GridVolSurface;
pub use traits::VolatilitySurface;
