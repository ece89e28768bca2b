use chrono::NaiveDate;

use contracts::shared::seasonality::{DecompositionPoint, SeasonalDecomposition};

use crate::shared::error::{AnalyticsError, Result};

/// Weekly seasonality of daily data.
pub const WEEKLY_PERIOD: usize = 7;

/// Classical multiplicative decomposition: observed = trend × seasonal × residual.
///
/// - trend: centred moving average over `period` points (a 2×`period` MA for
///   even periods), undefined for the first and last `period / 2` points;
/// - seasonal: mean of observed / trend per position within the period,
///   rescaled so the factors average to 1, repeated over the series;
/// - residual: observed / (trend × seasonal), undefined where trend is.
///
/// Needs at least two full periods of strictly positive values.
pub fn decompose(series: &[(NaiveDate, f64)], period: usize) -> Result<SeasonalDecomposition> {
    let required = match period.checked_mul(2) {
        Some(required) if period >= 2 => required,
        _ => return Err(AnalyticsError::InvalidPeriod(period)),
    };
    if series.len() < required {
        return Err(AnalyticsError::InsufficientSeriesLength {
            required,
            actual: series.len(),
        });
    }
    if let Some((index, &(_, value))) = series.iter().enumerate().find(|(_, (_, v))| v.is_nan() || *v <= 0.0) {
        return Err(AnalyticsError::NonPositiveValue { index, value });
    }

    let observed: Vec<f64> = series.iter().map(|&(_, v)| v).collect();
    let trend = centred_moving_average(&observed, period);

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (&x, t)) in observed.iter().zip(&trend).enumerate() {
        if let Some(t) = t {
            sums[i % period] += x / t;
            counts[i % period] += 1;
        }
    }

    // every position has at least one defined trend value once len >= 2 * period
    let mut factors: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&s, &c)| if c > 0 { s / c as f64 } else { f64::NAN })
        .collect();
    let mean = factors.iter().sum::<f64>() / period as f64;
    for f in factors.iter_mut() {
        *f /= mean;
    }

    let points = series
        .iter()
        .zip(&trend)
        .enumerate()
        .map(|(i, (&(date, x), &t))| {
            let seasonal = factors[i % period];
            DecompositionPoint {
                date,
                observed: x,
                trend: t,
                seasonal,
                residual: t.map(|t| x / (t * seasonal)),
            }
        })
        .collect();

    tracing::debug!(
        "decomposed {} observations with period {}: factors {:?}",
        series.len(),
        period,
        factors
    );

    Ok(SeasonalDecomposition {
        period,
        points,
        seasonal_factors: factors,
    })
}

/// Two-sided moving average. Odd periods use `period` equal weights; even
/// periods use `period + 1` weights with halves at both ends.
fn centred_moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let weights: Vec<f64> = if period % 2 == 1 {
        vec![1.0 / period as f64; period]
    } else {
        let mut w = vec![1.0 / period as f64; period + 1];
        w[0] = 0.5 / period as f64;
        w[period] = 0.5 / period as f64;
        w
    };
    let half = weights.len() / 2;

    (0..values.len())
        .map(|i| {
            if i < half || i + half >= values.len() {
                return None;
            }
            let window = &values[i - half..=i + half];
            Some(window.iter().zip(&weights).map(|(v, w)| v * w).sum())
        })
        .collect()
}
