//! Writers for resampled output.

use candlestick_core::{DataError, ResampledCandle};
use std::path::Path;
use tracing::info;

/// Write resampled candles to a JSON file.
pub fn write_json(path: &Path, candles: &[ResampledCandle]) -> Result<(), DataError> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, candles).map_err(|e| DataError::ParseError(e.to_string()))?;
    info!("Wrote {} resampled candles to {}", candles.len(), path.display());
    Ok(())
}

/// Write resampled candles to a CSV file.
pub fn write_csv(path: &Path, candles: &[ResampledCandle]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| DataError::ParseError(e.to_string()))?;
    for candle in candles {
        writer
            .serialize(candle)
            .map_err(|e| DataError::ParseError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(DataError::Io)?;
    info!("Wrote {} resampled candles to {}", candles.len(), path.display());
    Ok(())
}
