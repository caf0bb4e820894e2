//! Benchmarks for the resampling engine.

use candlestick_core::Candle;
use candlestick_resample::resample_minutes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;

/// Newest-first 1m series with a mild price walk.
fn generate_candles(size: usize) -> Vec<Candle> {
    (0..size)
        .map(|i| {
            let drift = Decimal::from((i % 40) as i64) / Decimal::from(10);
            let price = Decimal::from(7500) + drift;
            Candle::new(
                1_533_143_400 - (i as i64) * 60,
                price,
                price + Decimal::ONE,
                price - Decimal::ONE,
                price,
                Decimal::from(1000 + (i % 97) as i64),
            )
        })
        .collect()
}

fn benchmark_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for size in [1_000, 10_000, 100_000].iter() {
        let candles = generate_candles(*size);

        group.bench_with_input(BenchmarkId::new("to_1h", size), &candles, |b, candles| {
            b.iter(|| resample_minutes(black_box(candles), black_box(60)))
        });

        group.bench_with_input(BenchmarkId::new("to_1d", size), &candles, |b, candles| {
            b.iter(|| resample_minutes(black_box(candles), black_box(1440)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resample);
criterion_main!(benches);
