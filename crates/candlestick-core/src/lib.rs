//! Core types for the candlestick resampling engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data value types (Candle, ResampledCandle)
//! - Period tokens and the canonical minute table
//! - Error types shared across the workspace

pub mod error;
pub mod types;

pub use error::{DataError, ResampleError};
pub use types::*;
