//! Inspect command implementation.

use anyhow::{Context, Result};
use candlestick_data::{load_candles, native_spacing};

use crate::cli::InspectArgs;

pub async fn run(args: InspectArgs) -> Result<()> {
    let candles = load_candles(&args.input)
        .await
        .with_context(|| format!("Failed to load candles from {}", args.input.display()))?;

    println!("File: {}", args.input.display());
    println!("Candles: {}", candles.len());

    if candles.is_empty() {
        return Ok(());
    }

    let newest = &candles[0];
    let oldest = &candles[candles.len() - 1];
    println!(
        "Newest: {} ({})",
        newest.datetime().format("%Y-%m-%d %H:%M:%S"),
        newest.time
    );
    println!(
        "Oldest: {} ({})",
        oldest.datetime().format("%Y-%m-%d %H:%M:%S"),
        oldest.time
    );

    match native_spacing(&candles) {
        Some(spacing) => {
            println!("Native spacing: {}s", spacing);

            let gaps: Vec<(i64, i64)> = candles
                .windows(2)
                .filter(|w| w[0].time - w[1].time != spacing)
                .map(|w| (w[1].time, w[0].time))
                .collect();
            if gaps.is_empty() {
                println!("Gaps: none");
            } else {
                println!("Gaps: {}", gaps.len());
                for (from, to) in &gaps {
                    println!("  {} -> {} ({}s)", from, to, to - from);
                }
            }
        }
        None => println!("Native spacing: unknown (need at least two candles)"),
    }

    Ok(())
}
