//! JSON candle source.

use candlestick_core::{Candle, DataError};
use std::io::Read;
use std::path::Path;

use crate::sort_newest_first;

/// JSON candle source for recorded feed data.
///
/// Expects a top-level array of objects with `time` (epoch seconds) and
/// numeric `open`/`high`/`low`/`close`/`volume` fields, the shape exchange
/// history endpoints are archived in.
pub struct JsonCandleSource {
    path: String,
}

impl JsonCandleSource {
    /// Create a new JSON candle source.
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
    let mut candles: Vec<Candle> =
        serde_json::from_reader(reader).map_err(|e| DataError::ParseError(e.to_string()))?;
    sort_newest_first(&mut candles);
    Ok(candles)
}
