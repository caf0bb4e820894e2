//! Resample command implementation.

use anyhow::{Context, Result};
use candlestick_core::Period;
use candlestick_data::{load_candles, native_spacing, write_csv, write_json};
use candlestick_resample::resample;
use tracing::{info, warn};

use crate::cli::ResampleArgs;

pub async fn run(args: ResampleArgs) -> Result<()> {
    let period: Period = args
        .period
        .parse()
        .with_context(|| format!("Invalid target period '{}'", args.period))?;

    let candles = load_candles(&args.input)
        .await
        .with_context(|| format!("Failed to load candles from {}", args.input.display()))?;
    info!(
        "Resampling {} candles from {} to {}",
        candles.len(),
        args.input.display(),
        period
    );

    let mut resampled = resample(&candles, period);

    if args.complete_only {
        match native_spacing(&candles) {
            Some(spacing) if period.as_secs() % spacing == 0 => {
                let per_target = (period.as_secs() / spacing) as u32;
                let before = resampled.len();
                resampled.retain(|r| r.is_complete(per_target));
                info!(
                    "Dropped {} incomplete bucket(s) of {}",
                    before - resampled.len(),
                    before
                );
            }
            Some(spacing) => {
                warn!(
                    "Native spacing {}s does not divide {}; keeping all buckets",
                    spacing, period
                );
            }
            None => warn!("Too few candles to infer native spacing; keeping all buckets"),
        }
    }

    // Output results
    match args.output.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&resampled)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for candle in &resampled {
                writer.serialize(candle)?;
            }
            writer.flush()?;
        }
        _ => {
            print_table(&resampled);
        }
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        match save_path.extension().and_then(|e| e.to_str()) {
            Some("csv") => write_csv(save_path, &resampled)?,
            _ => write_json(save_path, &resampled)?,
        }
    }

    Ok(())
}

fn print_table(resampled: &[candlestick_core::ResampledCandle]) {
    println!(
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>16} {:>7}",
        "time", "open", "high", "low", "close", "volume", "count"
    );
    for candle in resampled {
        println!(
            "{:<20} {:>12} {:>12} {:>12} {:>12} {:>16} {:>7}",
            candle.datetime().format("%Y-%m-%d %H:%M:%S"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
            candle.candle_count
        );
    }
    println!("{} buckets", resampled.len());
}
