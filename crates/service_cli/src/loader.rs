//! CSV market data loader
//!
//! Expects a header row followed by `date,currentPrice,vol,interestRate,divYield`
//! records with ISO 8601 dates.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pricer_core::market_data::{MarketDataSeries, MarketSnapshot};
use pricer_core::types::Date;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketDataRow {
    date: String,
    current_price: f64,
    vol: f64,
    interest_rate: f64,
    div_yield: f64,
}

/// Read a market data series from CSV.
pub fn read_market_data<R: Read>(reader: R) -> Result<MarketDataSeries> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in csv.deserialize::<MarketDataRow>().enumerate() {
        let line = index + 2;
        let row = record.map_err(|e| CliError::Load {
            line,
            message: e.to_string(),
        })?;
        let date = row.date.parse::<Date>().map_err(|e| CliError::Load {
            line,
            message: e.to_string(),
        })?;
        entries.push((
            date,
            MarketSnapshot::new(row.current_price, row.vol, row.interest_rate, row.div_yield),
        ));
    }

    debug!(rows = entries.len(), "read market data");
    Ok(MarketDataSeries::new(entries)?)
}

/// Load a market data series from a CSV file.
pub fn load_market_data(path: &Path) -> Result<MarketDataSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    read_market_data(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::MarketDataError;

    const SAMPLE: &str = "\
date,currentPrice,vol,interestRate,divYield
2020-05-01,1020.0,0.28,0.05,0.02
2020-05-04, 1100.0, 0.28, 0.05, 0.02
";

    #[test]
    fn test_read_sample() {
        let series = read_market_data(SAMPLE.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);

        let (date, snapshot) = series.last().unwrap();
        assert_eq!(*date, Date::from_ymd(2020, 5, 4).unwrap());
        assert_eq!(*snapshot, MarketSnapshot::new(1100.0, 0.28, 0.05, 0.02));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let data = "date,currentPrice,vol,interestRate,divYield\n\
                    2020-05-01,1020.0,0.28,0.05,0.02\n\
                    2020-05-04,abc,0.28,0.05,0.02\n";
        match read_market_data(data.as_bytes()) {
            Err(CliError::Load { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected load error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_reports_line() {
        let data = "date,currentPrice,vol,interestRate,divYield\n2020-13-01,1020.0,0.28,0.05,0.02\n";
        assert!(matches!(
            read_market_data(data.as_bytes()),
            Err(CliError::Load { line: 2, .. })
        ));
    }

    #[test]
    fn test_short_row_rejected() {
        let data = "date,currentPrice,vol,interestRate,divYield\n2020-05-01,1020.0,0.28,0.05\n";
        assert!(matches!(read_market_data(data.as_bytes()), Err(CliError::Load { .. })));
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let data = "date,currentPrice,vol,interestRate,divYield\n\
                    2020-05-04,1020.0,0.28,0.05,0.02\n\
                    2020-05-01,1100.0,0.28,0.05,0.02\n";
        assert!(matches!(
            read_market_data(data.as_bytes()),
            Err(CliError::MarketData(MarketDataError::UnsortedDates { .. }))
        ));
    }

    #[test]
    fn test_bundled_sample() {
        let series = read_market_data(include_str!("../../../data/sample_market.csv").as_bytes()).unwrap();
        assert_eq!(series.len(), 43);
        assert_eq!(series.first().unwrap().1, MarketSnapshot::new(1020.0, 0.28, 0.05, 0.02));
        assert_eq!(series.last().unwrap().0, Date::from_ymd(2020, 6, 30).unwrap());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_market_data(Path::new("does/not/exist.csv")),
            Err(CliError::FileNotFound(_))
        ));
    }
}
