//! # Pricer Models (L2: Business Logic)
//!
//! Equity options, closed-form analytics and simulation parameters.
//!
//! This crate provides:
//! - Option definitions (European and digital) with a factory
//! - Black-Scholes-Merton prices and Greeks with continuous dividend yield
//! - Normal distribution helpers backed by `statrs`
//! - GBM parameters for path simulation
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Typed errors** at every boundary, converting into `PricingError`
//! - **Dated valuation** over `pricer_core` market data series

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
