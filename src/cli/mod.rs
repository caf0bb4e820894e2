//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "candlestick")]
#[command(author, version, about = "Candlestick resampling engine for exchange price-bar streams")]
pub struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resample a candle file to a coarser period
    Resample(ResampleArgs),
    /// Report ordering, native spacing, and gaps of a candle file
    Inspect(InspectArgs),
}

#[derive(clap::Args)]
pub struct ResampleArgs {
    /// Input candle file (CSV or JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target period: a token such as 15m, 1h, 2w, or a bare minute count
    #[arg(short, long)]
    pub period: String,

    /// Output format (text, json, csv)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save results to file (.json or .csv)
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Drop buckets that absorbed fewer native candles than a full period
    #[arg(long)]
    pub complete_only: bool,
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Input candle file (CSV or JSON)
    #[arg(short, long)]
    pub input: PathBuf,
}
