//! Core data types for the candlestick engine.

mod candle;
mod period;

pub use candle::{Candle, ResampledCandle};
pub use period::{parse_minutes, Period, PeriodUnit, MINUTES_PER_YEAR};
