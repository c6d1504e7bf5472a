//! Z-score outlier detection for plain numeric sequences.

use crate::utils::stats::{mean, population_std};
use serde::{Deserialize, Serialize};

/// Default z-score threshold above which a point is flagged.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Per-point outlier report entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierPoint {
    /// Position of the value in the input sequence.
    pub index: usize,
    /// The value itself.
    pub value: f64,
    /// `(value - mean) / std` with population statistics. Non-finite
    /// when the standard deviation is zero.
    pub z_score: f64,
    /// Whether `|z_score|` exceeds the threshold. Always false for a
    /// non-finite z-score.
    pub is_outlier: bool,
}

/// Score every value against the population mean and standard deviation.
///
/// A zero standard deviation (constant input) yields non-finite
/// z-scores and no outlier flags; the sentinel is propagated rather
/// than treated as an error. Empty input yields an empty report.
pub fn detect_outliers(values: &[f64], threshold: f64) -> Vec<OutlierPoint> {
    if values.is_empty() {
        return Vec::new();
    }

    let m = mean(values);
    let std = population_std(values);

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let z_score = (value - m) / std;
            OutlierPoint {
                index,
                value,
                z_score,
                is_outlier: z_score.abs() > threshold,
            }
        })
        .collect()
}

/// Detect outliers with the default threshold of 2.0.
pub fn detect_outliers_default(values: &[f64]) -> Vec<OutlierPoint> {
    detect_outliers(values, DEFAULT_Z_THRESHOLD)
}
