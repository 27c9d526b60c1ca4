//! Option term sheet.

use pricer_core::types::Date;

use super::error::InstrumentError;

/// Static terms shared by every option variant.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::OptionTerms;
///
/// let expiry = Date::from_ymd(2020, 6, 30).unwrap();
/// let terms = OptionTerms::new("SPX", expiry, 1000.0, false, "USD-OIS").unwrap();
/// assert_eq!(terms.strike(), 1000.0);
/// assert!(!terms.is_call());
///
/// assert!(OptionTerms::new("SPX", expiry, 0.0, true, "USD-OIS").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionTerms {
    underlying: String,
    expiry: Date,
    strike: f64,
    is_call: bool,
    discount_curve: String,
}

impl OptionTerms {
    /// Create a term sheet.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` if `strike` is not strictly positive.
    pub fn new(
        underlying: impl Into<String>,
        expiry: Date,
        strike: f64,
        is_call: bool,
        discount_curve: impl Into<String>,
    ) -> Result<Self, InstrumentError> {
        if strike.is_nan() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            underlying: underlying.into(),
            expiry,
            strike,
            is_call,
            discount_curve: discount_curve.into(),
        })
    }

    /// Underlying identifier.
    #[inline]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.expiry
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// True for a call, false for a put.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.is_call
    }

    /// Name of the discounting curve.
    #[inline]
    pub fn discount_curve(&self) -> &str {
        &self.discount_curve
    }
}
