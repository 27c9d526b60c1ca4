//! Geometric Brownian Motion (GBM) parameters.
//!
//! GBM is the asset price dynamics used for simulation:
//! ```text
//! dS = μ * S * dt + σ * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Paths are built from the exact solution
//! ```text
//! S(t) = S(0) * exp(X(t)),   X(t+dt) = X(t) + (μ - σ²/2)*dt + σ*sqrt(dt)*Z
//! ```
//! where the Itô-adjusted drift comes from [`GbmParams::ito_adjusted`].

/// Drift, volatility and starting level of one simulated asset.
///
/// `initial_value` defaults to 0, so a bare `GbmParams::new` describes an
/// arithmetic Brownian motion driver rather than a price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Annualised drift (μ)
    pub drift: f64,
    /// Annualised volatility (σ)
    pub vol: f64,
    /// Level the geometric path starts from
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_value: f64,
}

impl GbmParams {
    /// Parameters with `initial_value = 0`.
    pub fn new(drift: f64, vol: f64) -> Self {
        Self {
            drift,
            vol,
            initial_value: 0.0,
        }
    }

    /// Set the starting level.
    pub fn with_initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = initial_value;
        self
    }

    /// Standard Brownian motion: drift 0, vol 1.
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Same parameters with the drift replaced by μ - σ²/2.
    pub fn ito_adjusted(&self) -> Self {
        Self {
            drift: self.drift - 0.5 * self.vol * self.vol,
            ..*self
        }
    }

    /// One Euler step of the arithmetic process: drift·dt + vol·z·√dt.
    #[inline]
    pub fn increment(&self, dt: f64, z: f64) -> f64 {
        self.drift * dt + self.vol * z * dt.sqrt()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self::new(0.05, 0.2).with_initial_value(100.0)
    }
}
