//! Observation records and the validated monthly series container.

use crate::core::Period;
use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// A single monthly sales observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The calendar month this value belongs to.
    pub period: Period,
    /// Sales volume for the month. Finite and non-negative.
    pub value: f64,
    /// Decorative reference-curve value carried by synthetic data.
    /// Purely informational for display; no computation consumes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_line: Option<f64>,
}

impl Observation {
    /// Create an observation without a trend-line annotation.
    pub fn new(period: Period, value: f64) -> Self {
        Self {
            period,
            value,
            trend_line: None,
        }
    }
}

/// An ordered, gap-free monthly sales series.
///
/// The constructor guarantees that periods are strictly increasing and
/// month-contiguous, and that every value is finite and non-negative.
/// Year-over-year and seasonal computations assume at least two full
/// years (24 points); shorter series degrade as documented on the
/// functions concerned rather than failing.
///
/// Serialized as a plain array of observations; deserialization goes
/// through the validating constructor, so invalid payloads are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Observation>", try_from = "Vec<Observation>")]
pub struct MonthlySeries {
    observations: Vec<Observation>,
}

impl From<MonthlySeries> for Vec<Observation> {
    fn from(series: MonthlySeries) -> Self {
        series.observations
    }
}

impl TryFrom<Vec<Observation>> for MonthlySeries {
    type Error = AnalyticsError;

    fn try_from(observations: Vec<Observation>) -> Result<Self> {
        Self::new(observations)
    }
}

impl MonthlySeries {
    /// Build a series from observations, validating the invariants.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        for window in observations.windows(2) {
            if window[1].period != window[0].period.next() {
                return Err(AnalyticsError::PeriodError(format!(
                    "periods must be strictly increasing and month-contiguous, got {} after {}",
                    window[1].period, window[0].period
                )));
            }
        }
        for obs in &observations {
            if !obs.value.is_finite() || obs.value < 0.0 {
                return Err(AnalyticsError::InvalidParameter(format!(
                    "sales value for {} must be finite and non-negative, got {}",
                    obs.period, obs.value
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Build a series from raw values starting at `start`, one per month.
    pub fn from_values(start: Period, values: Vec<f64>) -> Result<Self> {
        let mut period = start;
        let mut observations = Vec::with_capacity(values.len());
        for value in values {
            observations.push(Observation::new(period, value));
            period = period.next();
        }
        Self::new(observations)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations in chronological order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The raw values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// First period, if any.
    pub fn first_period(&self) -> Option<Period> {
        self.observations.first().map(|o| o.period)
    }

    /// Last period, if any.
    pub fn last_period(&self) -> Option<Period> {
        self.observations.last().map(|o| o.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn series_constructs_from_contiguous_observations() {
        let series = MonthlySeries::from_values(
            period(2022, 1),
            vec![100.0, 110.0, 120.0],
        )
        .unwrap();

        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.values(), vec![100.0, 110.0, 120.0]);
        assert_eq!(series.first_period(), Some(period(2022, 1)));
        assert_eq!(series.last_period(), Some(period(2022, 3)));
    }

    #[test]
    fn series_spans_year_boundary() {
        let series =
            MonthlySeries::from_values(period(2022, 11), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        let periods: Vec<String> = series
            .observations()
            .iter()
            .map(|o| o.period.to_string())
            .collect();
        assert_eq!(periods, ["2022-11", "2022-12", "2023-01", "2023-02"]);
    }

    #[test]
    fn series_rejects_period_gaps() {
        let observations = vec![
            Observation::new(period(2022, 1), 100.0),
            Observation::new(period(2022, 3), 120.0), // skips February
        ];
        assert!(matches!(
            MonthlySeries::new(observations),
            Err(AnalyticsError::PeriodError(_))
        ));
    }

    #[test]
    fn series_rejects_out_of_order_periods() {
        let observations = vec![
            Observation::new(period(2022, 2), 100.0),
            Observation::new(period(2022, 1), 120.0),
        ];
        assert!(matches!(
            MonthlySeries::new(observations),
            Err(AnalyticsError::PeriodError(_))
        ));

        let observations = vec![
            Observation::new(period(2022, 2), 100.0),
            Observation::new(period(2022, 2), 120.0), // duplicate
        ];
        assert!(matches!(
            MonthlySeries::new(observations),
            Err(AnalyticsError::PeriodError(_))
        ));
    }

    #[test]
    fn series_rejects_invalid_values() {
        let result = MonthlySeries::from_values(period(2022, 1), vec![100.0, -5.0]);
        assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));

        let result = MonthlySeries::from_values(period(2022, 1), vec![f64::NAN]);
        assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));

        let result = MonthlySeries::from_values(period(2022, 1), vec![f64::INFINITY]);
        assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = MonthlySeries::new(vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.first_period(), None);
        assert_eq!(series.last_period(), None);
    }

    #[test]
    fn series_serde_rejects_invalid_payloads() {
        // Gap between periods
        let json = r#"[{"period":"2022-01","value":10.0},{"period":"2022-03","value":12.0}]"#;
        assert!(serde_json::from_str::<MonthlySeries>(json).is_err());

        // Negative value
        let json = r#"[{"period":"2022-01","value":-1.0}]"#;
        assert!(serde_json::from_str::<MonthlySeries>(json).is_err());

        // Valid payload round-trips
        let series =
            MonthlySeries::from_values(period(2022, 1), vec![10.0, 12.0]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let back: MonthlySeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn observation_serde_round_trips() {
        let obs = Observation {
            period: period(2023, 7),
            value: 18250.0,
            trend_line: Some(21500.0),
        };

        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);

        // trend_line is omitted when absent
        let obs = Observation::new(period(2023, 7), 18250.0);
        let json = serde_json::to_string(&obs).unwrap();
        assert!(!json.contains("trend_line"));
    }
}
