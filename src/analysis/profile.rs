//! Calendar-month and quarterly aggregation profiles.
//!
//! Unlike the positional bucketing in [`seasonal_indices`], these
//! aggregate by the observation's actual calendar month or quarter, so
//! they stay correct for series that do not start in January.
//!
//! [`seasonal_indices`]: crate::analysis::seasonal_indices

use crate::core::MonthlySeries;
use serde::{Deserialize, Serialize};

/// Aggregate sales for one calendar month across all observed years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthProfile {
    /// Month of year, `1..=12`.
    pub month: u32,
    /// Mean sales volume across the observations in this month.
    pub mean: f64,
    /// Total sales volume across the observations in this month.
    pub total: f64,
    /// Number of observations in this month.
    pub count: usize,
}

/// Aggregate sales for one quarter across all observed years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarterProfile {
    /// Quarter of year, `1..=4` (Q1 = Jan-Mar).
    pub quarter: u32,
    /// Mean sales volume across the observations in this quarter.
    pub mean: f64,
    /// Total sales volume across the observations in this quarter.
    pub total: f64,
    /// Number of observations in this quarter.
    pub count: usize,
}

/// Average and total sales per calendar month, in month order.
/// Months with no observations are omitted.
pub fn monthly_profile(series: &MonthlySeries) -> Vec<MonthProfile> {
    let mut totals = [0.0; 12];
    let mut counts = [0usize; 12];
    for obs in series.observations() {
        let slot = (obs.period.month() - 1) as usize;
        totals[slot] += obs.value;
        counts[slot] += 1;
    }

    (0..12)
        .filter(|&slot| counts[slot] > 0)
        .map(|slot| MonthProfile {
            month: slot as u32 + 1,
            mean: totals[slot] / counts[slot] as f64,
            total: totals[slot],
            count: counts[slot],
        })
        .collect()
}

/// Average and total sales per quarter, in quarter order.
/// Quarters with no observations are omitted.
pub fn quarterly_profile(series: &MonthlySeries) -> Vec<QuarterProfile> {
    let mut totals = [0.0; 4];
    let mut counts = [0usize; 4];
    for obs in series.observations() {
        let slot = (obs.period.quarter() - 1) as usize;
        totals[slot] += obs.value;
        counts[slot] += 1;
    }

    (0..4)
        .filter(|&slot| counts[slot] > 0)
        .map(|slot| QuarterProfile {
            quarter: slot as u32 + 1,
            mean: totals[slot] / counts[slot] as f64,
            total: totals[slot],
            count: counts[slot],
        })
        .collect()
}
