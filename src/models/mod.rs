//! Forecasting models.

mod seasonal_trend;

pub use seasonal_trend::{
    compute_forecast, ForecastOrigin, SeasonalTrend, DEFAULT_INTERVAL_Z, RELATIVE_STANDARD_ERROR,
};
