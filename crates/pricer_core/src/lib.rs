//! # pricer_core: Foundation types for the hedging simulator
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention`, business-day calendar (`types::time`)
//! - Error types: `PricingError`, `DateError`, `InterpolationError` (`types::error`)
//! - Linear interpolation in one and two dimensions (`math::interpolators`)
//! - Yield curves, volatility surfaces and dated market data (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{business_days_between, business_year_fraction, Date};
//!
//! let start = Date::from_ymd(2020, 5, 1).unwrap();
//! let expiry = Date::from_ymd(2020, 6, 30).unwrap();
//!
//! assert_eq!(business_days_between(start, expiry), 42);
//! assert!((business_year_fraction(start, expiry) - 0.168).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `DayCountConvention` and `MarketSnapshot`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
