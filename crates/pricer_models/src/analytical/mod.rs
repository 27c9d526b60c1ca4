//! Analytical pricing formulas for European and digital options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton with continuous dividend yield
//! - Cash- and asset-settled digitals
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! The normal distribution comes from `statrs`.

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
pub use error::AnalyticalError;
