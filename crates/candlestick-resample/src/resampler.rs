//! The resampling engine.

use candlestick_core::{Candle, Period, ResampleError, ResampledCandle};
use rust_decimal::Decimal;

/// Running OHLCV aggregate for one bucket.
///
/// Input arrives newest-first, so the seeding candle pins the close and
/// every later fold moves the open back toward the bucket start.
#[derive(Debug)]
struct BucketAccumulator {
    boundary: i64,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: Decimal,
    candle_count: u32,
}

impl BucketAccumulator {
    /// Start a bucket from its newest candle.
    fn seed(boundary: i64, candle: &Candle) -> Self {
        Self {
            boundary,
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
            candle_count: 1,
        }
    }

    /// Absorb the next (older) candle of the same bucket.
    fn fold(&mut self, candle: &Candle) {
        self.open = candle.open;
        self.high = self.high.max(candle.high);
        self.low = self.low.min(candle.low);
        self.volume += candle.volume;
        self.candle_count += 1;
    }

    /// Produce the immutable output bar.
    fn finalize(self) -> ResampledCandle {
        ResampledCandle {
            time: self.boundary,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            candle_count: self.candle_count,
        }
    }
}

/// Smallest multiple of `width_secs` strictly greater than `time`.
///
/// Uniform for every candle: one sitting exactly on a period boundary is
/// still assigned to the next boundary above it. Buckets are therefore the
/// right-closed intervals `(boundary - width, boundary]`, anchored to
/// absolute epoch time rather than to the first candle of the window.
#[inline]
fn bucket_boundary(time: i64, width_secs: i64) -> i64 {
    width_secs * (time.div_euclid(width_secs) + 1)
}

/// Resample a newest-first candle sequence to a coarser target period.
///
/// Fails with [`ResampleError::InvalidConfiguration`] when `target_minutes`
/// is zero. Empty input yields empty output. Gapped input is folded as-is;
/// the affected buckets simply report a smaller `candle_count`.
pub fn resample_minutes(
    candles: &[Candle],
    target_minutes: u32,
) -> Result<Vec<ResampledCandle>, ResampleError> {
    let period = Period::from_minutes(target_minutes)?;
    Ok(resample(candles, period))
}

/// Resample a newest-first candle sequence to the given period.
///
/// Total over well-formed input: every candle lands in exactly one output
/// bucket and output order matches input order, newest bucket first. The
/// newest and oldest buckets may be partial where the input window cuts
/// through a period; `candle_count` lets the caller tell.
pub fn resample(candles: &[Candle], period: Period) -> Vec<ResampledCandle> {
    let width = period.as_secs();
    let mut resampled = Vec::with_capacity(candles.len());
    let mut current: Option<BucketAccumulator> = None;

    for candle in candles {
        let boundary = bucket_boundary(candle.time, width);
        current = Some(match current.take() {
            Some(mut bucket) if bucket.boundary == boundary => {
                bucket.fold(candle);
                bucket
            }
            Some(done) => {
                resampled.push(done.finalize());
                BucketAccumulator::seed(boundary, candle)
            }
            None => BucketAccumulator::seed(boundary, candle),
        });
    }

    if let Some(done) = current {
        resampled.push(done.finalize());
    }

    resampled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn candle(time: i64, prices: (Decimal, Decimal, Decimal, Decimal), volume: Decimal) -> Candle {
        Candle::new(time, prices.0, prices.1, prices.2, prices.3, volume)
    }

    /// 1m candles, newest-first, contiguous back from `start`.
    fn minute_series(start: i64, count: u32) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let price = Decimal::from(100 + i);
                candle(
                    start - i64::from(i) * 60,
                    (price, price + dec!(1), price - dec!(1), price + dec!(0.5)),
                    Decimal::from(10 * (i + 1)),
                )
            })
            .collect()
    }

    #[test]
    fn test_boundary_is_next_multiple() {
        assert_eq!(bucket_boundary(1533142801, 3600), 1533146400);
        assert_eq!(bucket_boundary(1533146399, 3600), 1533146400);
        // a candle sitting exactly on a boundary belongs to the next bucket
        assert_eq!(bucket_boundary(1533142800, 3600), 1533146400);
    }

    #[test]
    fn test_boundary_pre_epoch() {
        // floor division, not truncation toward zero
        assert_eq!(bucket_boundary(-30, 3600), 0);
        assert_eq!(bucket_boundary(-3630, 3600), -3600);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resample_minutes(&[], 60).unwrap(), vec![]);
    }

    #[test]
    fn test_zero_target_rejected() {
        let candles = minute_series(1533143400, 5);
        assert!(matches!(
            resample_minutes(&candles, 0),
            Err(ResampleError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_identity_resample() {
        let candles = minute_series(1533143400, 8);
        let resampled = resample_minutes(&candles, 1).unwrap();

        assert_eq!(resampled.len(), candles.len());
        for (bucket, original) in resampled.iter().zip(&candles) {
            assert_eq!(bucket.candle_count, 1);
            assert_eq!(bucket.open, original.open);
            assert_eq!(bucket.high, original.high);
            assert_eq!(bucket.low, original.low);
            assert_eq!(bucket.close, original.close);
            assert_eq!(bucket.volume, original.volume);
        }
    }

    #[test]
    fn test_conservation() {
        let candles = minute_series(1533143400, 97);
        let resampled = resample_minutes(&candles, 15).unwrap();

        let volume_in: Decimal = candles.iter().map(|c| c.volume).sum();
        let volume_out: Decimal = resampled.iter().map(|r| r.volume).sum();
        assert_eq!(volume_in, volume_out);

        let count_out: u32 = resampled.iter().map(|r| r.candle_count).sum();
        assert_eq!(count_out as usize, candles.len());
    }

    #[test]
    fn test_output_order_is_newest_first() {
        let candles = minute_series(1533143400, 97);
        let resampled = resample_minutes(&candles, 15).unwrap();

        assert!(resampled.windows(2).all(|w| w[0].time > w[1].time));
    }

    #[test]
    fn test_gap_tolerated() {
        // two 1m candles an hour apart
        let candles = vec![
            candle(7200, (dec!(105), dec!(106), dec!(104), dec!(105.5)), dec!(30)),
            candle(3600, (dec!(100), dec!(101), dec!(99), dec!(100.5)), dec!(20)),
        ];
        let resampled = resample_minutes(&candles, 60).unwrap();

        assert_eq!(resampled.len(), 2);
        assert_eq!(resampled[0].time, 10800);
        assert_eq!(resampled[0].candle_count, 1);
        assert_eq!(resampled[1].time, 7200);
        assert_eq!(resampled[1].candle_count, 1);
    }

    #[test]
    fn test_aggregation_semantics() {
        // one bucket: open from the oldest candle, close from the newest
        let candles = vec![
            candle(1320, (dec!(102), dec!(104), dec!(101), dec!(103)), dec!(7)),
            candle(1260, (dec!(100), dec!(107), dec!(98), dec!(102)), dec!(5)),
        ];
        let resampled = resample_minutes(&candles, 60).unwrap();

        assert_eq!(resampled.len(), 1);
        let bucket = &resampled[0];
        assert_eq!(bucket.time, 3600);
        assert_eq!(bucket.open, dec!(100));
        assert_eq!(bucket.high, dec!(107));
        assert_eq!(bucket.low, dec!(98));
        assert_eq!(bucket.close, dec!(103));
        assert_eq!(bucket.volume, dec!(12));
        assert_eq!(bucket.candle_count, 2);
    }

    #[test]
    fn test_non_divisible_target_has_uneven_counts() {
        // 15m native into a 40m target: defined, counts just vary
        let candles: Vec<Candle> = (0..16)
            .map(|i| {
                let price = Decimal::from(50 + i);
                candle(
                    96000 - i64::from(i) * 900,
                    (price, price + dec!(1), price - dec!(1), price),
                    dec!(100),
                )
            })
            .collect();
        let resampled = resample_minutes(&candles, 40).unwrap();

        let count_out: u32 = resampled.iter().map(|r| r.candle_count).sum();
        assert_eq!(count_out, 16);
        assert!(resampled.iter().all(|r| r.time % 2400 == 0));
        let counts: Vec<u32> = resampled.iter().map(|r| r.candle_count).collect();
        assert!(counts.iter().any(|&c| c != counts[0]));
    }
}
