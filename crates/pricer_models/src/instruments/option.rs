//! Equity option variants and their dated valuation.
//!
//! [`EquityOption`] is a closed enum over European and digital payoffs.
//! Pricing at a date goes through the business-day year fraction
//! `business_days_between(as_of, expiry) / 250`; on the expiry date itself
//! the option is worth its payoff, never the closed form.

use std::fmt;

use pricer_core::market_data::{MarketDataSeries, MarketSnapshot};
use pricer_core::types::{business_days_between, Date, PricingError, BUSINESS_DAYS_IN_YEAR};

use super::terms::OptionTerms;
use crate::analytical::BlackScholes;

/// Forward price of the underlying: S·exp((r - q)·T).
///
/// # Examples
/// ```
/// use pricer_models::instruments::forward_price;
///
/// let fwd = forward_price(48.0, 0.05, 0.03, 1.5);
/// assert!((fwd - 46.5813856).abs() < 1e-6);
/// ```
#[inline]
pub fn forward_price(spot: f64, div_yield: f64, rate: f64, expiry: f64) -> f64 {
    spot * ((rate - div_yield) * expiry).exp()
}

/// Single-asset equity option.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::instruments::{EquityOption, OptionTerms};
///
/// let expiry = Date::from_ymd(2020, 6, 30).unwrap();
/// let terms = OptionTerms::new("SPX", expiry, 1000.0, false, "USD").unwrap();
/// let put = EquityOption::European(terms);
///
/// let as_of = Date::from_ymd(2020, 5, 1).unwrap();
/// let snapshot = MarketSnapshot::new(1020.0, 0.28, 0.05, 0.02);
/// let price = put.price_black_scholes(as_of, &snapshot).unwrap();
/// assert!((3.0 * price - 103.641378).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquityOption {
    /// Vanilla European call or put
    European(OptionTerms),
    /// Digital paying 1 (cash-settled) or the underlying (asset-settled)
    Digital {
        /// Static terms
        terms: OptionTerms,
        /// Pays the asset price rather than one unit of cash
        asset_settled: bool,
    },
}

impl EquityOption {
    /// Static terms of the option.
    #[inline]
    pub fn terms(&self) -> &OptionTerms {
        match self {
            EquityOption::European(terms) => terms,
            EquityOption::Digital { terms, .. } => terms,
        }
    }

    /// Expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.terms().expiry()
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.terms().strike()
    }

    /// True for a call, false for a put.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.terms().is_call()
    }

    /// Short variant name used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            EquityOption::European(_) => "european",
            EquityOption::Digital { .. } => "digital",
        }
    }

    /// Intrinsic value at expiry for a given spot.
    ///
    /// Digitals pay only when strictly in the money.
    pub fn payoff_at(&self, spot: f64) -> f64 {
        let strike = self.strike();
        let in_the_money = if self.is_call() { spot > strike } else { spot < strike };

        match self {
            EquityOption::European(_) => {
                if self.is_call() {
                    (spot - strike).max(0.0)
                } else {
                    (strike - spot).max(0.0)
                }
            }
            EquityOption::Digital { asset_settled, .. } => match (in_the_money, asset_settled) {
                (false, _) => 0.0,
                (true, true) => spot,
                (true, false) => 1.0,
            },
        }
    }

    /// Payoff read off the price on the expiry date.
    ///
    /// # Errors
    /// `PricingError::MarketData` if the series has no expiry date.
    pub fn payoff(&self, series: &MarketDataSeries) -> Result<f64, PricingError> {
        let spot = series.spot(self.expiry())?;
        Ok(self.payoff_at(spot))
    }

    /// Business-day year fraction from `as_of` to expiry (0 on or after expiry).
    pub fn time_to_expiry(&self, as_of: Date) -> f64 {
        business_days_between(as_of, self.expiry()) as f64 / BUSINESS_DAYS_IN_YEAR as f64
    }

    fn model(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<BlackScholes, PricingError> {
        BlackScholes::require_positive_expiry(expiry)?;
        Ok(BlackScholes::from_snapshot(snapshot)?)
    }

    // ========================================================================
    // Closed form for a given time to expiry
    // ========================================================================

    /// Closed-form value for time to expiry `expiry` (years).
    ///
    /// # Errors
    /// `PricingError::DegenerateTime` if `expiry <= 0`, or
    /// `PricingError::InvalidInput` for a non-positive spot or volatility.
    pub fn price_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        let model = self.model(expiry, snapshot)?;
        let (strike, is_call) = (self.strike(), self.is_call());

        Ok(match self {
            EquityOption::European(_) => model.price(strike, expiry, is_call),
            EquityOption::Digital { asset_settled: true, .. } => {
                model.digital_asset_price(strike, expiry, is_call)
            }
            EquityOption::Digital { asset_settled: false, .. } => {
                model.digital_cash_price(strike, expiry, is_call)
            }
        })
    }

    /// ∂V/∂S for time to expiry `expiry`.
    pub fn delta_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        let model = self.model(expiry, snapshot)?;
        let (strike, is_call) = (self.strike(), self.is_call());

        Ok(match self {
            EquityOption::European(_) => model.delta(strike, expiry, is_call),
            EquityOption::Digital { asset_settled: true, .. } => {
                model.digital_asset_delta(strike, expiry, is_call)
            }
            EquityOption::Digital { asset_settled: false, .. } => {
                model.digital_cash_delta(strike, expiry, is_call)
            }
        })
    }

    /// ∂²V/∂S² for time to expiry `expiry`. European only.
    pub fn gamma_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        self.european_greek("gamma", expiry, snapshot, |m, k, t, _| m.gamma(k, t))
    }

    /// ∂V/∂σ for time to expiry `expiry`. European only.
    pub fn vega_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        self.european_greek("vega", expiry, snapshot, |m, k, t, _| m.vega(k, t))
    }

    /// Theta per business day for time to expiry `expiry`. European only.
    pub fn theta_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        self.european_greek("theta", expiry, snapshot, |m, k, t, call| {
            m.theta(k, t, call) / BUSINESS_DAYS_IN_YEAR as f64
        })
    }

    /// ∂V/∂r for time to expiry `expiry`. European only.
    pub fn rho_for_period(&self, expiry: f64, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        self.european_greek("rho", expiry, snapshot, |m, k, t, call| m.rho(k, t, call))
    }

    fn european_greek<F>(
        &self,
        greek: &str,
        expiry: f64,
        snapshot: &MarketSnapshot,
        formula: F,
    ) -> Result<f64, PricingError>
    where
        F: Fn(&BlackScholes, f64, f64, bool) -> f64,
    {
        match self {
            EquityOption::European(terms) => {
                let model = self.model(expiry, snapshot)?;
                Ok(formula(&model, terms.strike(), expiry, terms.is_call()))
            }
            EquityOption::Digital { .. } => {
                Err(PricingError::unsupported_greek(greek, self.variant_name()))
            }
        }
    }

    // ========================================================================
    // Dated valuation
    // ========================================================================

    /// Closed-form value at `as_of` against a snapshot.
    ///
    /// # Errors
    /// `PricingError::DegenerateTime` on or after expiry.
    pub fn price_black_scholes(&self, as_of: Date, snapshot: &MarketSnapshot) -> Result<f64, PricingError> {
        self.price_for_period(self.time_to_expiry(as_of), snapshot)
    }

    /// Value at `as_of`: the payoff on the expiry date, the closed form before it.
    ///
    /// # Errors
    /// `PricingError::MarketData` if `as_of` (or the expiry date, when they
    /// coincide) is missing from the series.
    pub fn current_price(&self, as_of: Date, series: &MarketDataSeries) -> Result<f64, PricingError> {
        if as_of == self.expiry() {
            return self.payoff(series);
        }
        self.price_black_scholes(as_of, series.get(as_of)?)
    }

    /// Delta at `as_of` against that date's snapshot.
    pub fn current_delta(&self, as_of: Date, series: &MarketDataSeries) -> Result<f64, PricingError> {
        self.delta_for_period(self.time_to_expiry(as_of), series.get(as_of)?)
    }

    /// Gamma at `as_of` against that date's snapshot.
    pub fn current_gamma(&self, as_of: Date, series: &MarketDataSeries) -> Result<f64, PricingError> {
        self.gamma_for_period(self.time_to_expiry(as_of), series.get(as_of)?)
    }

    /// True if the spot at `as_of` is strictly in the money.
    pub fn is_in_the_money(&self, as_of: Date, series: &MarketDataSeries) -> Result<bool, PricingError> {
        let spot = series.spot(as_of)?;
        let strike = self.strike();
        Ok(if self.is_call() { spot > strike } else { spot < strike })
    }
}

impl fmt::Display for EquityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.is_call() { "Call" } else { "Put" };
        let kind = match self {
            EquityOption::European(_) => "European",
            EquityOption::Digital { asset_settled: true, .. } => "Asset Digital",
            EquityOption::Digital { asset_settled: false, .. } => "Cash Digital",
        };
        write!(
            f,
            "{} {} {} K={} exp {}",
            self.terms().underlying(),
            kind,
            side,
            self.strike(),
            self.expiry()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::MarketDataError;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms(strike: f64, is_call: bool) -> OptionTerms {
        OptionTerms::new("IDX", date(2020, 6, 30), strike, is_call, "USD").unwrap()
    }

    fn european(strike: f64, is_call: bool) -> EquityOption {
        EquityOption::European(terms(strike, is_call))
    }

    fn digital(strike: f64, is_call: bool, asset_settled: bool) -> EquityOption {
        EquityOption::Digital {
            terms: terms(strike, is_call),
            asset_settled,
        }
    }

    fn snap(spot: f64, rate: f64, div_yield: f64, vol: f64) -> MarketSnapshot {
        MarketSnapshot::new(spot, vol, rate, div_yield)
    }

    // ==========================================================
    // Payoff Tests
    // ==========================================================

    #[test]
    fn test_european_payoff() {
        assert_eq!(european(100.0, true).payoff_at(110.0), 10.0);
        assert_eq!(european(100.0, true).payoff_at(90.0), 0.0);
        assert_eq!(european(100.0, false).payoff_at(90.0), 10.0);
        assert_eq!(european(100.0, false).payoff_at(110.0), 0.0);
    }

    #[test]
    fn test_digital_payoff_strictly_in_the_money() {
        assert_eq!(digital(100.0, true, false).payoff_at(100.0), 0.0);
        assert_eq!(digital(100.0, true, false).payoff_at(100.5), 1.0);
        assert_eq!(digital(100.0, true, true).payoff_at(100.5), 100.5);
        assert_eq!(digital(100.0, false, true).payoff_at(99.0), 99.0);
        assert_eq!(digital(100.0, false, false).payoff_at(101.0), 0.0);
    }

    #[test]
    fn test_payoff_reads_expiry_date() {
        let option = european(1000.0, false);
        let series = MarketDataSeries::from_prices(
            &[date(2020, 6, 29), date(2020, 6, 30)],
            &[990.0, 950.0],
            0.2,
            0.0,
            0.0,
        )
        .unwrap();
        assert_eq!(option.payoff(&series).unwrap(), 50.0);
    }

    #[test]
    fn test_payoff_missing_expiry_is_error() {
        let option = european(1000.0, false);
        let series =
            MarketDataSeries::from_prices(&[date(2020, 6, 29)], &[990.0], 0.2, 0.0, 0.0).unwrap();
        assert_eq!(
            option.payoff(&series),
            Err(PricingError::MarketData(MarketDataError::DateNotFound {
                date: date(2020, 6, 30)
            }))
        );
    }

    // ==========================================================
    // Closed-form Reference Tests
    // ==========================================================

    #[test]
    fn test_european_reference_prices() {
        let call = european(50.0, true)
            .price_for_period(1.25, &snap(48.0, 0.05, 0.02, 0.2))
            .unwrap();
        assert_relative_eq!(call, 4.096997, epsilon = 1e-6);

        let put = european(50.0, false)
            .price_for_period(0.5, &snap(53.0, 0.04, 0.06, 0.15))
            .unwrap();
        assert_relative_eq!(put, 1.128237, epsilon = 1e-6);
    }

    #[test]
    fn test_european_parity_reference() {
        let s = snap(45.0, 0.02, 0.01, 0.18);
        let call = european(50.0, true).price_for_period(0.9, &s).unwrap();
        let put = european(50.0, false).price_for_period(0.9, &s).unwrap();
        assert_relative_eq!(call - put, -4.5112346, epsilon = 1e-6);
    }

    #[test]
    fn test_digital_reference_prices() {
        let s = snap(100.0, 0.04, 0.0, 0.15);
        let asset_call = digital(105.0, true, true).price_for_period(2.1, &s).unwrap();
        let asset_put = digital(105.0, false, true).price_for_period(2.1, &s).unwrap();
        assert_relative_eq!(asset_call, 60.667602, epsilon = 1e-6);
        assert_relative_eq!(asset_put, 39.332398, epsilon = 1e-6);

        let s = snap(107.0, 0.03, 0.04, 0.24);
        let cash_call = digital(105.0, true, false).price_for_period(0.75, &s).unwrap();
        let cash_put = digital(105.0, false, false).price_for_period(0.75, &s).unwrap();
        assert_relative_eq!(cash_call, 0.469682, epsilon = 1e-6);
        assert_relative_eq!(cash_put, 0.5080694, epsilon = 1e-6);
    }

    #[test]
    fn test_digital_parity_references() {
        let s = snap(106.0, 0.07, 0.01, 0.12);
        let sum = digital(105.0, true, false).price_for_period(1.0, &s).unwrap()
            + digital(105.0, false, false).price_for_period(1.0, &s).unwrap();
        assert_relative_eq!(sum, 0.9323938, epsilon = 1e-6);

        let s = snap(101.0, 0.04, 0.04, 0.29);
        let sum = digital(105.0, true, true).price_for_period(1.5, &s).unwrap()
            + digital(105.0, false, true).price_for_period(1.5, &s).unwrap();
        assert_relative_eq!(sum, 95.118218, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_time_is_error() {
        let s = snap(100.0, 0.05, 0.0, 0.2);
        assert_eq!(
            european(100.0, true).price_for_period(0.0, &s),
            Err(PricingError::DegenerateTime { t: 0.0 })
        );
        assert!(matches!(
            digital(100.0, true, false).delta_for_period(-0.1, &s),
            Err(PricingError::DegenerateTime { .. })
        ));
    }

    #[test]
    fn test_invalid_volatility_is_input_error() {
        let s = snap(100.0, 0.05, 0.0, 0.0);
        assert!(matches!(
            european(100.0, true).price_for_period(1.0, &s),
            Err(PricingError::InvalidInput(_))
        ));
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_digital_higher_greeks_unsupported() {
        let option = digital(105.0, true, false);
        let s = snap(100.0, 0.04, 0.0, 0.15);
        for result in [
            option.gamma_for_period(1.0, &s),
            option.vega_for_period(1.0, &s),
            option.theta_for_period(1.0, &s),
            option.rho_for_period(1.0, &s),
        ] {
            assert!(matches!(
                result,
                Err(PricingError::UnsupportedGreek { ref variant, .. }) if variant == "digital"
            ));
        }
        assert_eq!(
            option.gamma_for_period(1.0, &s),
            Err(PricingError::unsupported_greek("gamma", "digital"))
        );
    }

    #[test]
    fn test_theta_is_per_business_day() {
        let s = snap(53.0, 0.04, 0.06, 0.15);
        let option = european(50.0, false);
        let model = BlackScholes::from_snapshot(&s).unwrap();
        assert_relative_eq!(
            option.theta_for_period(0.5, &s).unwrap() * 250.0,
            model.theta(50.0, 0.5, false),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_digital_delta_dispatch() {
        let s = snap(107.0, 0.03, 0.04, 0.24);
        let model = BlackScholes::from_snapshot(&s).unwrap();
        assert_eq!(
            digital(105.0, false, false).delta_for_period(0.75, &s).unwrap(),
            model.digital_cash_delta(105.0, 0.75, false)
        );
        assert_eq!(
            digital(105.0, true, true).delta_for_period(0.75, &s).unwrap(),
            model.digital_asset_delta(105.0, 0.75, true)
        );
    }

    // ==========================================================
    // Dated Valuation Tests
    // ==========================================================

    fn hedge_series() -> MarketDataSeries {
        MarketDataSeries::new(vec![
            (date(2020, 5, 1), snap(1020.0, 0.05, 0.02, 0.28)),
            (date(2020, 5, 4), snap(1100.0, 0.05, 0.02, 0.28)),
            (date(2020, 6, 30), snap(980.0, 0.05, 0.02, 0.28)),
        ])
        .unwrap()
    }

    #[test]
    fn test_time_to_expiry_business_days() {
        let option = european(1000.0, false);
        assert_relative_eq!(option.time_to_expiry(date(2020, 5, 1)), 42.0 / 250.0, epsilon = 1e-15);
        assert_eq!(option.time_to_expiry(date(2020, 6, 30)), 0.0);
        assert_eq!(option.time_to_expiry(date(2020, 7, 15)), 0.0);
    }

    #[test]
    fn test_current_price_before_expiry() {
        let option = european(1000.0, false);
        let price = option.current_price(date(2020, 5, 1), &hedge_series()).unwrap();
        assert_relative_eq!(3.0 * price, 103.641378, epsilon = 1e-6);

        let price = option.current_price(date(2020, 5, 4), &hedge_series()).unwrap();
        assert_relative_eq!(3.0 * price, 36.651980, epsilon = 1e-6);
    }

    #[test]
    fn test_current_price_at_expiry_is_payoff() {
        let option = european(1000.0, false);
        assert_eq!(option.current_price(date(2020, 6, 30), &hedge_series()).unwrap(), 20.0);
        assert_eq!(
            option.price_black_scholes(date(2020, 6, 30), &snap(980.0, 0.05, 0.02, 0.28)),
            Err(PricingError::DegenerateTime { t: 0.0 })
        );
    }

    #[test]
    fn test_current_price_missing_date() {
        let option = european(1000.0, false);
        assert!(matches!(
            option.current_price(date(2020, 5, 5), &hedge_series()),
            Err(PricingError::MarketData(MarketDataError::DateNotFound { .. }))
        ));
    }

    #[test]
    fn test_current_delta_and_gamma() {
        let option = european(1000.0, false);
        let series = hedge_series();
        let delta = option.current_delta(date(2020, 5, 1), &series).unwrap();
        // hedge = -delta * contracts * spot
        assert_relative_eq!(-delta * 3.0 * 1020.0, 1195.805281, epsilon = 1e-6);
        assert!(option.current_gamma(date(2020, 5, 1), &series).unwrap() > 0.0);
    }

    #[test]
    fn test_is_in_the_money() {
        let series = hedge_series();
        let put = european(1000.0, false);
        let call = european(1000.0, true);
        assert!(!put.is_in_the_money(date(2020, 5, 1), &series).unwrap());
        assert!(call.is_in_the_money(date(2020, 5, 1), &series).unwrap());
        assert!(put.is_in_the_money(date(2020, 6, 30), &series).unwrap());
        // At the strike neither side is in the money
        let at_strike = european(1100.0, true);
        assert!(!at_strike.is_in_the_money(date(2020, 5, 4), &series).unwrap());
    }

    #[test]
    fn test_display() {
        let text = digital(105.0, true, false).to_string();
        assert_eq!(text, "IDX Cash Digital Call K=105 exp 2020-06-30");
    }

    #[test]
    fn test_forward_price_reference() {
        assert_relative_eq!(forward_price(48.0, 0.05, 0.03, 1.5), 46.5813856, epsilon = 1e-6);
    }
}
