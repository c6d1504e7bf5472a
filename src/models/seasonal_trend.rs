//! Simplified seasonal-trend forecasting model.
//!
//! A single-pass level + trend + seasonal estimator with fixed-ratio
//! confidence bounds. Despite its exponential-smoothing lineage this is
//! NOT an iterated Holt-Winters recursion: level, trend, and seasonal
//! indices are estimated once from the history and never re-smoothed.

use crate::analysis::seasonal_indices;
use crate::core::{ForecastPoint, MonthlySeries, Period};
use crate::error::{AnalyticsError, Result};
use crate::utils::stats::{mean, quantile_normal};
use chrono::Datelike;

/// Default interval multiplier, the nominal 95% normal z-value.
pub const DEFAULT_INTERVAL_Z: f64 = 1.96;

/// Fixed relative standard error applied to every point forecast.
/// A flat 15% of the forecast value, not estimated from residuals.
pub const RELATIVE_STANDARD_ERROR: f64 = 0.15;

/// How forecast periods are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastOrigin {
    /// Continue from the month after the historical series' last period.
    #[default]
    SeriesEnd,
    /// Continue from the month after the current wall-clock month.
    ///
    /// Reproduces the labeling of the system this model derives from,
    /// which tied forecast periods to "now" instead of to the series'
    /// own end. Only useful for compatibility; with a stale series the
    /// labels detach from the data.
    WallClock,
}

/// Simplified seasonal-trend forecaster.
///
/// Estimation (single pass, no smoothing recursion):
/// - level: mean of the first `min(12, n)` observations;
/// - trend: mean year-over-year monthly delta
///   `(v[i] - v[i-12]) / 12` for `i` in `12..min(24, n)`, averaged
///   again over those terms (0 when `n <= 12`);
/// - seasonal indices: positional table from [`seasonal_indices`]
///   over the full series with period 12.
///
/// Forecast for step `h`:
/// `value = round((level + h*trend) * seasonals[(n + h - 1) % 12])`
/// with bounds `value ∓ z * |value| * 0.15`, rounded.
///
/// Series shorter than the 24-point design threshold are accepted and
/// degrade: the level averages fewer points and the trend term rests on
/// fewer (or zero) year-over-year deltas.
#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    seasonal_period: usize,
    interval_z: f64,
    origin: ForecastOrigin,
    level: Option<f64>,
    trend: Option<f64>,
    seasonals: Option<Vec<f64>>,
    last_period: Option<Period>,
    n: usize,
}

impl SeasonalTrend {
    /// Create a model with the default monthly cycle and 95% intervals.
    pub fn new() -> Self {
        Self {
            seasonal_period: 12,
            interval_z: DEFAULT_INTERVAL_Z,
            origin: ForecastOrigin::default(),
            level: None,
            trend: None,
            seasonals: None,
            last_period: None,
            n: 0,
        }
    }

    /// Derive the interval multiplier from a confidence level in (0, 1).
    pub fn with_confidence(mut self, level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(AnalyticsError::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {}",
                level
            )));
        }
        self.interval_z = quantile_normal((1.0 + level) / 2.0);
        Ok(self)
    }

    /// Set the forecast-period labeling mode.
    pub fn with_origin(mut self, origin: ForecastOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Estimated level after fitting.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Estimated monthly trend after fitting.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Estimated seasonal index table after fitting.
    pub fn seasonals(&self) -> Option<&[f64]> {
        self.seasonals.as_deref()
    }

    /// Check if the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.level.is_some()
    }

    /// Estimate level, trend, and seasonal indices from the series.
    pub fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptyData);
        }

        let values = series.values();
        let n = values.len();
        let period = self.seasonal_period;

        let level = mean(&values[..n.min(period)]);

        // Doubly-averaged year-over-year monthly delta; undefined (0)
        // without at least one full prior cycle to difference against.
        let trend = if n > period {
            let upper = n.min(2 * period);
            let sum: f64 = (period..upper)
                .map(|i| (values[i] - values[i - period]) / period as f64)
                .sum();
            sum / (upper - period) as f64
        } else {
            0.0
        };

        self.seasonals = Some(seasonal_indices(&values, period)?);
        self.level = Some(level);
        self.trend = Some(trend);
        self.last_period = series.last_period();
        self.n = n;

        Ok(())
    }

    /// Produce `horizon` forecast points with confidence bounds.
    pub fn predict(&self, horizon: usize) -> Result<Vec<ForecastPoint>> {
        let level = self.level.ok_or(AnalyticsError::FitRequired)?;
        let trend = self.trend.ok_or(AnalyticsError::FitRequired)?;
        let seasonals = self.seasonals.as_ref().ok_or(AnalyticsError::FitRequired)?;
        let period = self.seasonal_period;

        let mut next_period = self.start_period()?;
        let mut points = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            let seasonal = seasonals[(self.n + h - 1) % period];
            let value = ((level + h as f64 * trend) * seasonal).round();

            // |value| keeps the bounds ordered if a degenerate series
            // drives the point forecast negative.
            let margin = self.interval_z * value.abs() * RELATIVE_STANDARD_ERROR;

            points.push(ForecastPoint {
                period: next_period,
                value,
                lower: (value - margin).round(),
                upper: (value + margin).round(),
            });
            next_period = next_period.next();
        }

        Ok(points)
    }

    fn start_period(&self) -> Result<Period> {
        match self.origin {
            ForecastOrigin::SeriesEnd => self
                .last_period
                .map(|p| p.next())
                .ok_or(AnalyticsError::FitRequired),
            ForecastOrigin::WallClock => {
                let now = chrono::Utc::now();
                Ok(Period::new(now.year(), now.month())?.next())
            }
        }
    }
}

impl Default for SeasonalTrend {
    fn default() -> Self {
        Self::new()
    }
}

/// Fit a default [`SeasonalTrend`] model and forecast `horizon` months.
pub fn compute_forecast(series: &MonthlySeries, horizon: usize) -> Result<Vec<ForecastPoint>> {
    let mut model = SeasonalTrend::new();
    model.fit(series)?;
    model.predict(horizon)
}
