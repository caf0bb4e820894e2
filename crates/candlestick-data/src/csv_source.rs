//! CSV candle source.

use candlestick_core::{Candle, DataError};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::sort_newest_first;

/// CSV record format.
///
/// All five numeric fields are mandatory; a row that fails to parse fails
/// the whole load rather than being silently dropped.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Time", alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    time: String,
    #[serde(alias = "Open")]
    open: Decimal,
    #[serde(alias = "High")]
    high: Decimal,
    #[serde(alias = "Low")]
    low: Decimal,
    #[serde(alias = "Close")]
    close: Decimal,
    #[serde(alias = "Volume")]
    volume: Decimal,
}

/// CSV candle source for recorded feed data.
pub struct CsvCandleSource {
    path: String,
}

impl CsvCandleSource {
    /// Create a new CSV candle source.
    pub fn new(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            return Err(DataError::NoDataAvailable(path.display().to_string()));
        }
        Ok(Self {
            path: path.display().to_string(),
        })
    }

    /// Load all candles, newest-first.
    pub async fn load_all(&self) -> Result<Vec<Candle>, DataError> {
        let file = std::fs::File::open(&self.path)?;
        load_from_reader(file)
    }
}

fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Candle>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut candles = Vec::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

        candles.push(Candle::new(
            parse_timestamp(&record.time)?,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ));
    }

    sort_newest_first(&mut candles);
    Ok(candles)
}

/// Parse various timestamp formats into UTC epoch seconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d",
        "%Y/%m/%d",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp());
        }
    }

    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds if > 10 digits
        if ts > 10_000_000_000 {
            return Ok(ts / 1000);
        } else {
            return Ok(ts);
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse timestamp: {}",
        date_str
    )))
}
