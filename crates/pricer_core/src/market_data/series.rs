//! Dated market data for a single underlying.
//!
//! A [`MarketDataSeries`] is an ordered array of `(Date, MarketSnapshot)`
//! pairs with strictly increasing dates. Lookups are exact-date binary
//! searches; a missing date is an error, never back-filled.

use crate::market_data::error::MarketDataError;
use crate::types::Date;

/// Pricing inputs observed on one date.
///
/// Volatility and rates are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Underlying spot price
    pub spot: f64,
    /// Annualised volatility
    pub vol: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub div_yield: f64,
}

impl MarketSnapshot {
    /// Create a snapshot.
    pub fn new(spot: f64, vol: f64, rate: f64, div_yield: f64) -> Self {
        Self {
            spot,
            vol,
            rate,
            div_yield,
        }
    }
}

/// Ordered daily market data.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{MarketDataSeries, MarketSnapshot};
/// use pricer_core::types::Date;
///
/// let d0 = Date::from_ymd(2020, 5, 1).unwrap();
/// let d1 = Date::from_ymd(2020, 5, 4).unwrap();
///
/// let series = MarketDataSeries::new(vec![
///     (d0, MarketSnapshot::new(1020.0, 0.28, 0.05, 0.02)),
///     (d1, MarketSnapshot::new(1100.0, 0.28, 0.05, 0.02)),
/// ]).unwrap();
///
/// assert_eq!(series.get(d1).unwrap().spot, 1100.0);
/// assert!(series.get(Date::from_ymd(2020, 5, 2).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketDataSeries {
    entries: Vec<(Date, MarketSnapshot)>,
}

impl MarketDataSeries {
    /// Build a series, rejecting duplicate or out-of-order dates.
    pub fn new(entries: Vec<(Date, MarketSnapshot)>) -> Result<Self, MarketDataError> {
        if let Some(w) = entries.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(MarketDataError::UnsortedDates {
                previous: w[0].0,
                next: w[1].0,
            });
        }
        Ok(Self { entries })
    }

    /// Build a series from a price path, holding vol and rates constant.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidGrid` when `dates` and `prices` differ in
    /// length, plus the ordering errors of [`MarketDataSeries::new`].
    pub fn from_prices(
        dates: &[Date],
        prices: &[f64],
        vol: f64,
        rate: f64,
        div_yield: f64,
    ) -> Result<Self, MarketDataError> {
        if dates.len() != prices.len() {
            return Err(MarketDataError::InvalidGrid(format!(
                "{} dates but {} prices",
                dates.len(),
                prices.len()
            )));
        }
        let entries = dates
            .iter()
            .zip(prices)
            .map(|(&d, &p)| (d, MarketSnapshot::new(p, vol, rate, div_yield)))
            .collect();
        Self::new(entries)
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the series holds no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `date`, if present.
    pub fn index_of(&self, date: Date) -> Option<usize> {
        self.entries.binary_search_by_key(&date, |(d, _)| *d).ok()
    }

    /// Snapshot for exactly `date`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::DateNotFound` if the date is absent.
    pub fn get(&self, date: Date) -> Result<&MarketSnapshot, MarketDataError> {
        self.index_of(date)
            .map(|i| &self.entries[i].1)
            .ok_or(MarketDataError::DateNotFound { date })
    }

    /// Spot price on exactly `date`.
    pub fn spot(&self, date: Date) -> Result<f64, MarketDataError> {
        self.get(date).map(|s| s.spot)
    }

    /// Returns true if `date` is present.
    pub fn contains(&self, date: Date) -> bool {
        self.index_of(date).is_some()
    }

    /// First entry.
    pub fn first(&self) -> Option<&(Date, MarketSnapshot)> {
        self.entries.first()
    }

    /// Last entry.
    pub fn last(&self) -> Option<&(Date, MarketSnapshot)> {
        self.entries.last()
    }

    /// Iterate entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = &(Date, MarketSnapshot)> + '_ {
        self.entries.iter()
    }

    /// Iterate dates in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[(Date, MarketSnapshot)] {
        &self.entries
    }

    /// Dated spot prices.
    pub fn price_series(&self) -> Vec<(Date, f64)> {
        self.entries.iter().map(|(d, s)| (*d, s.spot)).collect()
    }

    /// Copy of the series restricted to dates on or before `cutoff`.
    pub fn truncate_after(&self, cutoff: Date) -> Self {
        let end = self.entries.partition_point(|(d, _)| *d <= cutoff);
        Self {
            entries: self.entries[..end].to_vec(),
        }
    }

    /// Entries dated on or before `date`, without copying.
    pub fn history_until(&self, date: Date) -> &[(Date, MarketSnapshot)] {
        let end = self.entries.partition_point(|(d, _)| *d <= date);
        &self.entries[..end]
    }
}

impl<'a> IntoIterator for &'a MarketDataSeries {
    type Item = &'a (Date, MarketSnapshot);
    type IntoIter = std::slice::Iter<'a, (Date, MarketSnapshot)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn snapshot(spot: f64) -> MarketSnapshot {
        MarketSnapshot::new(spot, 0.2, 0.05, 0.01)
    }

    fn series() -> MarketDataSeries {
        MarketDataSeries::new(vec![
            (date(2020, 5, 1), snapshot(100.0)),
            (date(2020, 5, 4), snapshot(101.0)),
            (date(2020, 5, 5), snapshot(99.5)),
            (date(2020, 5, 6), snapshot(102.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_exact_date() {
        let s = series();
        assert_eq!(s.spot(date(2020, 5, 5)).unwrap(), 99.5);
        assert_eq!(s.index_of(date(2020, 5, 6)), Some(3));
    }

    #[test]
    fn test_missing_date_is_error() {
        let s = series();
        assert_eq!(
            s.get(date(2020, 5, 2)),
            Err(MarketDataError::DateNotFound {
                date: date(2020, 5, 2)
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let result = MarketDataSeries::new(vec![
            (date(2020, 5, 1), snapshot(100.0)),
            (date(2020, 5, 1), snapshot(101.0)),
        ]);
        assert!(matches!(result, Err(MarketDataError::UnsortedDates { .. })));
    }

    #[test]
    fn test_rejects_descending_dates() {
        let result = MarketDataSeries::new(vec![
            (date(2020, 5, 4), snapshot(100.0)),
            (date(2020, 5, 1), snapshot(101.0)),
        ]);
        assert_eq!(
            result,
            Err(MarketDataError::UnsortedDates {
                previous: date(2020, 5, 4),
                next: date(2020, 5, 1)
            })
        );
    }

    #[test]
    fn test_truncate_after() {
        let s = series().truncate_after(date(2020, 5, 4));
        assert_eq!(s.len(), 2);
        assert_eq!(s.last().unwrap().0, date(2020, 5, 4));

        let s = series().truncate_after(date(2020, 5, 3));
        assert_eq!(s.len(), 1);

        let s = series().truncate_after(date(2020, 4, 1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_history_until() {
        let s = series();
        let history = s.history_until(date(2020, 5, 5));
        assert_eq!(history.len(), 3);
        assert_eq!(history[2].1.spot, 99.5);

        assert!(s.history_until(date(2020, 4, 30)).is_empty());
        assert_eq!(s.history_until(date(2021, 1, 1)).len(), 4);
    }

    #[test]
    fn test_price_series() {
        let prices = series().price_series();
        assert_eq!(prices[1], (date(2020, 5, 4), 101.0));
        assert_eq!(prices.len(), 4);
    }

    #[test]
    fn test_from_prices_length_mismatch() {
        let result = MarketDataSeries::from_prices(&[date(2020, 5, 1)], &[1.0, 2.0], 0.2, 0.0, 0.0);
        assert!(matches!(result, Err(MarketDataError::InvalidGrid(_))));
    }
}
