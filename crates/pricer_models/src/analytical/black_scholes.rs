//! Black-Scholes-Merton pricing with continuous dividend yield.
//!
//! This module provides the closed form for European calls and puts,
//! cash- and asset-settled digitals, and analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//! **Cash digital**: e^(-rT)·N(±d₂)
//! **Asset digital**: S·e^(-qT)·N(±d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Every formula assumes T > 0. Use [`BlackScholes::require_positive_expiry`]
//! before pricing at a date that may be the expiry itself.

use pricer_core::market_data::MarketSnapshot;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// First-order and second-order sensitivities of a European option.
///
/// Theta is per year (∂V/∂t with calendar time running forward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes-Merton model for a single market snapshot.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(48.0, 0.05, 0.02, 0.2).unwrap();
/// let call = bs.price_call(50.0, 1.25);
/// assert!((call - 4.096997).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.0, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.0).is_err());
    /// assert!(BlackScholes::new(100.0, -0.01, 0.0, 0.2).is_ok());
    /// ```
    pub fn new(spot: f64, rate: f64, div_yield: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if spot.is_nan() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility.is_nan() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            div_yield,
            volatility,
        })
    }

    /// Creates a model from a dated market snapshot.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Result<Self, AnalyticalError> {
        Self::new(snapshot.spot, snapshot.rate, snapshot.div_yield, snapshot.vol)
    }

    /// Returns `expiry` unchanged if it is strictly positive.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositiveExpiry` otherwise (including NaN).
    pub fn require_positive_expiry(expiry: f64) -> Result<f64, AnalyticalError> {
        if expiry > 0.0 {
            Ok(expiry)
        } else {
            Err(AnalyticalError::NonPositiveExpiry { expiry })
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn div_yield(&self) -> f64 {
        self.div_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift = (self.rate - self.div_yield + 0.5 * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    #[inline]
    fn discount(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }

    #[inline]
    fn dividend_discount(&self, expiry: f64) -> f64 {
        (-self.div_yield * expiry).exp()
    }

    // ========================================================================
    // European
    // ========================================================================

    /// European call: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        self.spot * self.dividend_discount(expiry) * norm_cdf(d1)
            - strike * self.discount(expiry) * norm_cdf(d2)
    }

    /// European put: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        strike * self.discount(expiry) * norm_cdf(-d2)
            - self.spot * self.dividend_discount(expiry) * norm_cdf(-d1)
    }

    /// European price for either side.
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        if is_call {
            self.price_call(strike, expiry)
        } else {
            self.price_put(strike, expiry)
        }
    }

    /// Delta: call e^(-qT)·N(d₁), put e^(-qT)·(N(d₁) - 1).
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        let q_disc = self.dividend_discount(expiry);
        if is_call {
            q_disc * n_d1
        } else {
            q_disc * (n_d1 - 1.0)
        }
    }

    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        self.dividend_discount(expiry) * norm_pdf(d1)
            / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega = S·e^(-qT)·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        self.spot * self.dividend_discount(expiry) * norm_pdf(d1) * expiry.sqrt()
    }

    /// Theta per year.
    ///
    /// - Call: -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn theta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let fwd_spot = self.spot * self.dividend_discount(expiry);
        let pv_strike = strike * self.discount(expiry);

        let decay = -fwd_spot * norm_pdf(d1) * self.volatility / (2.0 * expiry.sqrt());

        if is_call {
            decay - self.rate * pv_strike * norm_cdf(d2) + self.div_yield * fwd_spot * norm_cdf(d1)
        } else {
            decay + self.rate * pv_strike * norm_cdf(-d2) - self.div_yield * fwd_spot * norm_cdf(-d1)
        }
    }

    /// Rho: call K·T·e^(-rT)·N(d₂), put -K·T·e^(-rT)·N(-d₂).
    #[inline]
    pub fn rho(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d2 = self.d2(strike, expiry);
        let pv_strike_t = strike * expiry * self.discount(expiry);
        if is_call {
            pv_strike_t * norm_cdf(d2)
        } else {
            -pv_strike_t * norm_cdf(-d2)
        }
    }

    /// All European Greeks at once.
    pub fn greeks(&self, strike: f64, expiry: f64, is_call: bool) -> Greeks {
        Greeks {
            delta: self.delta(strike, expiry, is_call),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, is_call),
            rho: self.rho(strike, expiry, is_call),
        }
    }

    // ========================================================================
    // Digital
    // ========================================================================

    /// Cash-or-nothing digital paying 1: e^(-rT)·N(±d₂).
    #[inline]
    pub fn digital_cash_price(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d2 = self.d2(strike, expiry);
        let n = if is_call { norm_cdf(d2) } else { norm_cdf(-d2) };
        self.discount(expiry) * n
    }

    /// Asset-or-nothing digital paying S_T: S·e^(-qT)·N(±d₁).
    #[inline]
    pub fn digital_asset_price(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d1 = self.d1(strike, expiry);
        let n = if is_call { norm_cdf(d1) } else { norm_cdf(-d1) };
        self.spot * self.dividend_discount(expiry) * n
    }

    /// Cash-or-nothing delta: ±e^(-rT)·φ(d₂) / (S·σ·√T).
    #[inline]
    pub fn digital_cash_delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d2 = self.d2(strike, expiry);
        let delta =
            self.discount(expiry) * norm_pdf(d2) / (self.spot * self.volatility * expiry.sqrt());
        if is_call {
            delta
        } else {
            -delta
        }
    }

    /// Asset-or-nothing delta.
    ///
    /// - Call: e^(-qT)·(N(d₁) + φ(d₁)/(σ√T))
    /// - Put: e^(-qT)·(N(-d₁) - φ(d₁)/(σ√T))
    #[inline]
    pub fn digital_asset_delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let d1 = self.d1(strike, expiry);
        let density_term = norm_pdf(d1) / (self.volatility * expiry.sqrt());
        let q_disc = self.dividend_discount(expiry);
        if is_call {
            q_disc * (norm_cdf(d1) + density_term)
        } else {
            q_disc * (norm_cdf(-d1) - density_term)
        }
    }
}
