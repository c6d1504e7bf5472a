//! Seasonal index estimation.

use crate::error::{AnalyticsError, Result};

/// Compute normalized seasonal indices by positional bucketing.
///
/// Values are bucketed by `index % period` into fixed-size sum/count
/// arrays, each bucket is averaged, and the averages are scaled so the
/// mean of the returned table is 1.0. A bucket with no members gets the
/// neutral multiplier 1.0 before normalization.
///
/// Bucketing is positional, not calendar-based: bucket 0 is the cycle
/// position of the first value. The table is calendar-aligned only when
/// the series starts at position 0 of the cycle (January for a monthly
/// series). Series shorter than `period` are accepted; their buckets
/// are simply undersampled.
pub fn seasonal_indices(values: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(AnalyticsError::InvalidParameter(
            "seasonal period must be positive".to_string(),
        ));
    }

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, &value) in values.iter().enumerate() {
        sums[i % period] += value;
        counts[i % period] += 1;
    }

    let averages: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 1.0 })
        .collect();

    let overall = averages.iter().sum::<f64>() / period as f64;

    Ok(averages.iter().map(|&avg| avg / overall).collect())
}
