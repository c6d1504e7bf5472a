//! Forecast result records.

use crate::core::Period;
use serde::{Deserialize, Serialize};

/// A single forecast step with its confidence interval.
///
/// Invariant: `lower <= value <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// The calendar month being forecast.
    pub period: Period,
    /// Point forecast, rounded to whole sales units.
    pub value: f64,
    /// Lower confidence bound.
    pub lower: f64,
    /// Upper confidence bound.
    pub upper: f64,
}

impl ForecastPoint {
    /// Width of the confidence interval.
    pub fn interval_width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check whether an observed value falls inside the interval.
    pub fn covers(&self, observed: f64) -> bool {
        self.lower <= observed && observed <= self.upper
    }
}
