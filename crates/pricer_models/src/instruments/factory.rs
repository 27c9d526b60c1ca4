//! Option factory keyed by [`OptionType`].

use std::fmt;
use std::str::FromStr;

use pricer_core::types::Date;

use super::error::InstrumentError;
use super::option::EquityOption;
use super::terms::OptionTerms;

/// Option kinds the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OptionType {
    /// European call
    EuropeanCall,
    /// European put
    EuropeanPut,
    /// Cash-settled digital call
    DigitalCall,
    /// Cash-settled digital put
    DigitalPut,
}

impl OptionType {
    /// Every option type, in declaration order.
    pub const ALL: [OptionType; 4] = [
        OptionType::EuropeanCall,
        OptionType::EuropeanPut,
        OptionType::DigitalCall,
        OptionType::DigitalPut,
    ];

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            OptionType::EuropeanCall => "European Call",
            OptionType::EuropeanPut => "European Put",
            OptionType::DigitalCall => "Binary Call",
            OptionType::DigitalPut => "Binary Put",
        }
    }

    /// True for the call side.
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::EuropeanCall | OptionType::DigitalCall)
    }

    /// True for the digital variants.
    pub fn is_digital(&self) -> bool {
        matches!(self, OptionType::DigitalCall | OptionType::DigitalPut)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    /// Parse a type name, ignoring case, spaces, `-` and `_`.
    ///
    /// Accepts the variant names ("EuropeanCall", "european-call"), the
    /// descriptions ("Binary Put") and the short forms "call" and "put".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "europeancall" | "call" => Ok(OptionType::EuropeanCall),
            "europeanput" | "put" => Ok(OptionType::EuropeanPut),
            "digitalcall" | "binarycall" => Ok(OptionType::DigitalCall),
            "digitalput" | "binaryput" => Ok(OptionType::DigitalPut),
            _ => Err(InstrumentError::NotImplemented {
                option_type: s.to_string(),
            }),
        }
    }
}

/// Builds [`EquityOption`]s from an [`OptionType`] tag.
///
/// Digitals built here are cash-settled.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{EquityOptionFactory, OptionType};
///
/// let expiry = Date::from_ymd(2020, 6, 30).unwrap();
/// let put = EquityOptionFactory::create(OptionType::EuropeanPut, "SPX", expiry, 1000.0, "USD").unwrap();
/// assert!(!put.is_call());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EquityOptionFactory;

impl EquityOptionFactory {
    /// Build an option of the given type.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` if `strike <= 0`.
    pub fn create(
        option_type: OptionType,
        underlying: &str,
        expiry: Date,
        strike: f64,
        discount_curve: &str,
    ) -> Result<EquityOption, InstrumentError> {
        let terms = OptionTerms::new(underlying, expiry, strike, option_type.is_call(), discount_curve)?;

        Ok(if option_type.is_digital() {
            EquityOption::Digital {
                terms,
                asset_settled: false,
            }
        } else {
            EquityOption::European(terms)
        })
    }

    /// Build an option from a type name.
    ///
    /// # Errors
    /// `InstrumentError::NotImplemented` naming an unknown type.
    pub fn create_named(
        option_type: &str,
        underlying: &str,
        expiry: Date,
        strike: f64,
        discount_curve: &str,
    ) -> Result<EquityOption, InstrumentError> {
        Self::create(option_type.parse()?, underlying, expiry, strike, discount_curve)
    }
}
