//! Descriptive trend statistics over a monthly sales series.

use crate::core::MonthlySeries;
use crate::utils::stats::{mean, population_std};
use serde::{Deserialize, Serialize};

/// Aggregate trend statistics for a historical series.
///
/// Degenerate inputs surface as non-finite values rather than errors:
/// a zero mean makes `coefficient_of_variation` non-finite, fewer than
/// 24 points make `year_over_year_growth` `NaN`, and fewer than 2
/// points make the slope and month-over-month growth `NaN`. Callers
/// should present non-finite fields as "undefined".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Mean monthly sales volume.
    pub average_monthly: f64,
    /// Least-squares slope of value against the 1-based month index.
    pub trend_slope: f64,
    /// Population standard deviation of the values.
    pub std_deviation: f64,
    /// Standard deviation divided by the mean.
    pub coefficient_of_variation: f64,
    /// Relative change between the second and first 12-month block.
    pub year_over_year_growth: f64,
    /// Relative change of the last observation versus the previous one.
    pub month_over_month_growth: f64,
    /// Sum of all values.
    pub total: f64,
    /// Largest value.
    pub max: f64,
    /// Smallest value.
    pub min: f64,
}

/// Compute aggregate trend statistics. Returns `None` for an empty series.
///
/// The year-over-year growth compares the averages of the first two
/// fixed 12-month blocks (indices 0..12 versus 12..24) regardless of
/// where the series starts in the calendar or how long it is beyond 24
/// points; it is `NaN` when fewer than 24 points are available.
pub fn analyze_trends(series: &MonthlySeries) -> Option<TrendSummary> {
    if series.is_empty() {
        return None;
    }

    let values = series.values();
    let avg = mean(&values);
    let std = population_std(&values);

    Some(TrendSummary {
        average_monthly: avg,
        trend_slope: linear_slope(&values),
        std_deviation: std,
        coefficient_of_variation: std / avg,
        year_over_year_growth: year_over_year_growth(&values),
        month_over_month_growth: month_over_month_growth(&values),
        total: values.iter().sum(),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
    })
}

/// Ordinary least-squares slope of value against the 1-based index,
/// using the closed-form sums over x = 1..=n. `NaN` for n < 2.
fn linear_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }

    let nf = n as f64;
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (i + 1) as f64 * y)
        .sum();
    let sum_x = nf * (nf + 1.0) / 2.0;
    let sum_x2 = nf * (nf + 1.0) * (2.0 * nf + 1.0) / 6.0;

    (nf * sum_xy - sum_x * sum_y) / (nf * sum_x2 - sum_x * sum_x)
}

fn year_over_year_growth(values: &[f64]) -> f64 {
    if values.len() < 24 {
        return f64::NAN;
    }
    let first_year = mean(&values[..12]);
    let second_year = mean(&values[12..24]);
    (second_year - first_year) / first_year
}

fn month_over_month_growth(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let last = values[values.len() - 1];
    let previous = values[values.len() - 2];
    (last - previous) / previous
}
