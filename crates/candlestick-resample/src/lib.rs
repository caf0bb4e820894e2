//! Time-aligned OHLCV candle resampling.
//!
//! This crate converts fine-grained candle sequences into coarser,
//! epoch-aligned bars:
//! - buckets are right-closed intervals anchored to absolute epoch time
//! - aggregation keeps first open, last close, extreme high/low, summed volume
//! - every bucket carries the number of native candles it absorbed, so
//!   consumers can tell a closed bar from a still-forming one
//!
//! The engine is a pure, synchronous, single-pass transformation: no I/O,
//! no shared state, O(n) over the input with O(1) auxiliary state.

pub mod resampler;

pub use candlestick_core::parse_minutes;
pub use resampler::{resample, resample_minutes};
