//! Equity option definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects):
//! - [`EquityOption`] is a closed enum over European and digital payoffs
//! - [`OptionTerms`] holds the term sheet shared by every variant
//! - [`EquityOptionFactory`] builds options from an [`OptionType`] tag
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{EquityOptionFactory, OptionType};
//!
//! let expiry = Date::from_ymd(2020, 6, 30).unwrap();
//! let call = EquityOptionFactory::create(OptionType::EuropeanCall, "SPX", expiry, 100.0, "USD").unwrap();
//!
//! assert_eq!(call.payoff_at(110.0), 10.0);
//! ```

mod error;
mod factory;
mod option;
mod terms;

pub use error::InstrumentError;
pub use factory::{EquityOptionFactory, OptionType};
pub use option::{forward_price, EquityOption};
pub use terms::OptionTerms;
