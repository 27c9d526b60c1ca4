//! Mathematical utilities.
//!
//! - `interpolators`: bracketing search and linear 2D/3D interpolation

pub mod interpolators;
