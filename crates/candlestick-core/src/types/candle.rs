//! OHLCV (Open, High, Low, Close, Volume) candle types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLCV bar at the native feed granularity.
///
/// `time` is the UTC epoch second at which the bar opened. Sequences handed
/// to the resampler are ordered newest-first, the order exchange history
/// endpoints deliver them in. All five numeric fields are mandatory;
/// loosely-typed feed records must be rejected at the adapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in seconds (bar open)
    pub time: i64,
    /// Opening price
    pub open: Decimal,
    /// Highest price
    pub high: Decimal,
    /// Lowest price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Traded volume, non-negative
    pub volume: Decimal,
}

impl Candle {
    /// Create a new candle.
    pub fn new(
        time: i64,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Calculate the candle's range (high - low).
    #[inline]
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Calculate the candle's body size (absolute difference between open and close).
    #[inline]
    pub fn body(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// Check if the candle is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the candle is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Get the open time as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time, 0)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// A coarser bar produced by the resampler.
///
/// `time` is the right boundary of the bucket the folded candles fell into.
/// `candle_count` is a completeness signal, not a pricing field: a bucket
/// holding fewer native candles than the native-per-target ratio sits at a
/// window edge or covers a feed gap, and consumers decide whether to act
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResampledCandle {
    /// Bucket boundary, Unix timestamp in seconds
    pub time: i64,
    /// Opening price of the earliest folded candle
    pub open: Decimal,
    /// Highest price across the bucket
    pub high: Decimal,
    /// Lowest price across the bucket
    pub low: Decimal,
    /// Closing price of the latest folded candle
    pub close: Decimal,
    /// Summed volume across the bucket
    pub volume: Decimal,
    /// Number of native candles folded into this bucket
    pub candle_count: u32,
}

impl ResampledCandle {
    /// Check whether the bucket absorbed the expected number of native candles.
    #[inline]
    pub fn is_complete(&self, native_per_target: u32) -> bool {
        self.candle_count == native_per_target
    }

    /// Get the bucket boundary as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time, 0)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}
