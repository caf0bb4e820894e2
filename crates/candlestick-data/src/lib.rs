//! File adapters for candle data.
//!
//! The resampling engine expects strict, newest-first candle sequences.
//! These adapters sit at that boundary: they parse CSV/JSON files, reject
//! records with missing or unparseable fields, and normalize ordering
//! before anything reaches the engine.

mod csv_source;
mod json_source;
mod writer;

pub use csv_source::CsvCandleSource;
pub use json_source::JsonCandleSource;
pub use writer::{write_csv, write_json};

use candlestick_core::{Candle, DataError};
use std::path::Path;
use tracing::debug;

/// Load candles from a CSV or JSON file, dispatching on the extension.
pub async fn load_candles(path: &Path) -> Result<Vec<Candle>, DataError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let candles = match extension.as_str() {
        "csv" => CsvCandleSource::new(path)?.load_all().await?,
        "json" => JsonCandleSource::new(path)?.load_all().await?,
        _ => {
            return Err(DataError::UnsupportedFormat(format!(
                "{} (expected .csv or .json)",
                path.display()
            )))
        }
    };

    debug!("Loaded {} candles from {}", candles.len(), path.display());
    Ok(candles)
}

/// Sort candles newest-first, the order the engine consumes them in.
pub(crate) fn sort_newest_first(candles: &mut [Candle]) {
    candles.sort_by_key(|c| std::cmp::Reverse(c.time));
}

/// Infer the native bar spacing of a newest-first sequence, in seconds.
///
/// Gapped feeds stretch some deltas, so the smallest positive delta is
/// taken as the native spacing. `None` for fewer than two candles.
pub fn native_spacing(candles: &[Candle]) -> Option<i64> {
    candles
        .windows(2)
        .map(|w| w[0].time - w[1].time)
        .filter(|&d| d > 0)
        .min()
}
