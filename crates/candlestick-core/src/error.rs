//! Error types for the candlestick engine.

use thiserror::Error;

/// Errors raised by the resampling engine and period parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    #[error("Invalid period token: {0}")]
    InvalidPeriodToken(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised at the file adapter boundary.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available at {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
